mod commands;
mod error;
mod logger;

use error::Result as AppResult;

use portal_config::Config;
use portal_core::{UserId, UserIdentity};
use portal_gateway::{MemoryBlobStore, MemoryIdentityGateway, MemoryProfileStore};
use portal_session::SessionReconciler;
use portal_view::ViewModel;

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

pub(crate) type AppReconciler =
    SessionReconciler<MemoryIdentityGateway, MemoryProfileStore, MemoryBlobStore>;

/// Account the in-memory identity provider resolves sign-ins to.
fn demo_account() -> UserIdentity {
    UserIdentity {
        uid: UserId::new(Uuid::new_v4().to_string()),
        display_name: Some("Ana Lopez".to_string()),
        email: Some("ana.lopez@example.com".to_string()),
        photo_url: None,
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.clone().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let gateway = MemoryIdentityGateway::new(demo_account());
    let profiles = MemoryProfileStore::new();
    let blobs = MemoryBlobStore::new();

    let reconciler = Arc::new(SessionReconciler::new(
        gateway,
        profiles,
        blobs,
        config.reconciler.clone(),
    ));

    // Auth-event listener: feeds provider transitions into the reconciler
    let listener = reconciler.clone();
    tokio::spawn(async move { listener.run().await });

    // Renderer: reflect every published decision
    let mut decisions = reconciler.subscribe();
    tokio::spawn(async move {
        while decisions.changed().await.is_ok() {
            let decision = decisions.borrow_and_update().clone();
            let view = ViewModel::project(&decision);
            println!(
                "-- {} | {} <{}> [{}]",
                view.mode, view.display_name, view.email, view.initials
            );
        }
    });

    commands::repl(reconciler).await
}
