//! Stdin command loop - the interaction surface of the demo shell.
//!
//! Each command maps to one session operation; outcome messaging goes
//! through the toast mapping so the strings match what a member would see.

use crate::AppReconciler;
use crate::error::Result as AppResult;

use portal_core::{ProfileCompletion, ProfileUpdate};
use portal_view::{TabNav, Toast, ToastKind, ViewModel};

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  login                                      sign in with the identity provider
  login-dash                                 sign in and go to the dashboard
  logout                                     sign out
  complete <phone> <institution> <education> <experience> <tags,csv>
                                             submit the required profile fields
  update <first> <last> <phone> <institution> <bio...>
                                             edit the profile
  avatar <path>                              upload a profile picture
  tab <id>                                   switch dashboard tab
  state                                      dump the current view model
  help                                       show this help
  quit                                       exit";

pub async fn repl(reconciler: Arc<AppReconciler>) -> AppResult<()> {
    println!("{HELP}");

    let mut tabs = TabNav::dashboard();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("login") => sign_in(&reconciler, false).await,
            Some("login-dash") => sign_in(&reconciler, true).await,
            Some("logout") => match reconciler.sign_out().await {
                Ok(()) => show(&Toast::signed_out()),
                Err(error) => show(&Toast::action_failed(&error)),
            },
            Some("complete") => {
                let args: Vec<&str> = parts.collect();
                let [phone, institution, education, experience, tags] = args.as_slice() else {
                    println!("usage: complete <phone> <institution> <education> <experience> <tags,csv>");
                    continue;
                };

                let completion = ProfileCompletion {
                    phone: phone.to_string(),
                    institution: institution.to_string(),
                    education: education.to_string(),
                    experience: experience.to_string(),
                    interests: tags.split(',').map(str::to_string).collect(),
                };

                match reconciler.complete_profile(completion).await {
                    Ok(()) => show(&Toast::profile_completed()),
                    Err(error) => show(&Toast::action_failed(&error)),
                }
            }
            Some("update") => {
                let args: Vec<&str> = parts.collect();
                if args.len() < 4 {
                    println!("usage: update <first> <last> <phone> <institution> <bio...>");
                    continue;
                }

                let changes = ProfileUpdate::edit_form(
                    args[0].to_string(),
                    args[1].to_string(),
                    args[2].to_string(),
                    args[3].to_string(),
                    args[4..].join(" "),
                );

                match reconciler.update_profile(changes).await {
                    Ok(()) => show(&Toast::profile_updated()),
                    Err(error) => show(&Toast::action_failed(&error)),
                }
            }
            Some("avatar") => {
                let Some(path) = parts.next() else {
                    println!("usage: avatar <path>");
                    continue;
                };

                match tokio::fs::read(path).await {
                    Ok(bytes) => match reconciler.upload_avatar(bytes).await {
                        Ok(url) => show(&Toast::success("Success", format!("Avatar at {url}"))),
                        Err(error) => show(&Toast::action_failed(&error)),
                    },
                    Err(error) => println!("cannot read {path}: {error}"),
                }
            }
            Some("tab") => {
                let Some(id) = parts.next() else {
                    println!("usage: tab <id>");
                    continue;
                };

                if tabs.select(id) {
                    println!("showing {}", tabs.content_id());
                } else {
                    println!("active tab: {}", tabs.active());
                }
            }
            Some("state") => {
                let view = ViewModel::project(&reconciler.decision());
                println!("{}", serde_json::to_string_pretty(&view).unwrap_or_default());
            }
            Some("help") => println!("{HELP}"),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other} (try 'help')"),
            None => {}
        }
    }

    Ok(())
}

async fn sign_in(reconciler: &AppReconciler, with_dashboard_redirect: bool) {
    match reconciler.sign_in_interactive(with_dashboard_redirect).await {
        Ok(_) => show(&Toast::signed_in()),
        Err(error) => show(&Toast::sign_in_failed(&error)),
    }
}

fn show(toast: &Toast) {
    let tag = match toast.kind {
        ToastKind::Success => "ok",
        ToastKind::Error => "error",
    };
    println!("[{tag}] {}: {}", toast.title, toast.message);
}
