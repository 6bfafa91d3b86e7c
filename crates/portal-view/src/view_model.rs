//! Pure projection of a session decision into display state.

use crate::initials::initials;

use portal_core::UiMode;
use portal_session::Decision;

use serde::Serialize;

const PLACEHOLDER_NAME: &str = "User Name";
const PLACEHOLDER_EMAIL: &str = "user@example.com";
const FALLBACK_DISPLAY_NAME: &str = "User";

/// Everything the rendering shell needs to paint one frame.
///
/// Exactly one region is primary per mode; the profile gate renders above
/// the site chrome, so the site stays visible underneath it. This type has
/// no decision authority - it only reflects what the reconciler published.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub mode: UiMode,
    pub signed_in: bool,
    pub show_public_site: bool,
    pub show_profile_gate: bool,
    pub show_dashboard: bool,
    pub display_name: String,
    pub email: String,
    pub initials: String,
    pub avatar_url: Option<String>,
    pub profile_form: ProfileForm,
}

/// Prefill values for the profile edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    pub bio: String,
}

impl ViewModel {
    pub fn project(decision: &Decision) -> Self {
        let Some(identity) = &decision.identity else {
            return Self::signed_out();
        };

        let profile = decision.profile.as_ref();

        let display_name = identity
            .display_name
            .clone()
            .or_else(|| {
                profile
                    .map(|p| p.display_name())
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());

        let email = identity
            .email
            .clone()
            .or_else(|| profile.and_then(|p| p.email.clone()))
            .unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string());

        let avatar_url = identity
            .photo_url
            .clone()
            .or_else(|| profile.and_then(|p| p.photo_url.clone()));

        let initials = match profile {
            Some(p) => initials(&p.first_name, &p.last_name, &display_name),
            None => initials("", "", &display_name),
        };

        let profile_form = profile
            .map(|p| ProfileForm {
                first_name: p.first_name.clone(),
                last_name: p.last_name.clone(),
                email: email.clone(),
                phone: p.phone.clone(),
                institution: p.institution.clone(),
                bio: p.bio.clone(),
            })
            .unwrap_or_default();

        Self {
            mode: decision.mode,
            signed_in: true,
            show_public_site: decision.mode != UiMode::Dashboard,
            show_profile_gate: decision.mode == UiMode::ProfileGate,
            show_dashboard: decision.mode == UiMode::Dashboard,
            display_name,
            email,
            initials,
            avatar_url,
            profile_form,
        }
    }

    fn signed_out() -> Self {
        Self {
            mode: UiMode::Public,
            signed_in: false,
            show_public_site: true,
            show_profile_gate: false,
            show_dashboard: false,
            display_name: PLACEHOLDER_NAME.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
            initials: "U".to_string(),
            avatar_url: None,
            profile_form: ProfileForm::default(),
        }
    }
}
