//! Dashboard tab navigation model.
//!
//! The top bar and the sidebar render from this one model, so the two nav
//! mirrors can never disagree about which tab is active.

use serde::Serialize;

pub const DASHBOARD_TABS: [&str; 4] = ["overview", "profile", "resources", "settings"];

/// A fixed tab set with exactly one active tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabNav {
    tabs: Vec<String>,
    active: usize,
}

impl TabNav {
    /// The first tab starts active.
    pub fn new(tabs: &[&str]) -> Self {
        debug_assert!(!tabs.is_empty(), "tab set must not be empty");

        Self {
            tabs: tabs.iter().map(|t| t.to_string()).collect(),
            active: 0,
        }
    }

    pub fn dashboard() -> Self {
        Self::new(&DASHBOARD_TABS)
    }

    pub fn tabs(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(String::as_str)
    }

    pub fn active(&self) -> &str {
        self.tabs
            .get(self.active)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    /// Activate a tab by id; unknown ids are ignored. Returns whether the
    /// selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|tab| tab == id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Element id of the content pane for the active tab.
    pub fn content_id(&self) -> String {
        format!("{}-content", self.active())
    }
}

impl Default for TabNav {
    fn default() -> Self {
        Self::dashboard()
    }
}
