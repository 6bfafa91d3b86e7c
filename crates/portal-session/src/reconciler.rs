//! Session reconciliation: auth transitions in, UI decisions out.

use crate::{Decision, ProfileSnapshot, Result as SessionResult, SessionError, SessionState};

use portal_config::ReconcilerConfig;
use portal_core::{ProfileCompletion, ProfileRecord, ProfileUpdate, UiMode, UserIdentity};
use portal_gateway::{AuthError, BlobStore, IdentityGateway, ProfileStore};

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, watch};
use tokio::time::timeout;
use tracing::{debug, info, warn};

const AVATAR_KEY_PREFIX: &str = "profile-pictures";

/// The decision rule, pure and total.
///
/// Returns the mode to present and whether the redirect intent survives
/// the decision. An incomplete (or unknown, or absent) profile gates;
/// the intent is consumed only when the dashboard is actually shown, and
/// abandoned when the identity is gone.
pub(crate) fn decide(
    identity_present: bool,
    profile: &ProfileSnapshot,
    pending_redirect: bool,
) -> (UiMode, bool) {
    if !identity_present {
        return (UiMode::Public, false);
    }
    if !profile.is_complete() {
        return (UiMode::ProfileGate, pending_redirect);
    }
    if pending_redirect {
        (UiMode::Dashboard, false)
    } else {
        (UiMode::Public, false)
    }
}

/// Translates auth-state transitions plus a possibly-slow profile fetch
/// into deterministic, UI-agnostic decisions.
///
/// Owns the only mutable session state. Each transition is stamped with a
/// generation; a commit whose generation is no longer current is dropped,
/// so a slow fetch can never clobber a newer decision. Decisions are
/// published over a watch channel the view layer subscribes to.
pub struct SessionReconciler<I, P, B> {
    identity_gateway: I,
    profiles: P,
    blobs: B,
    config: ReconcilerConfig,
    state: Mutex<SessionState>,
    generation: AtomicU64,
    decision_tx: watch::Sender<Decision>,
    decision_rx: watch::Receiver<Decision>,
}

impl<I, P, B> SessionReconciler<I, P, B>
where
    I: IdentityGateway,
    P: ProfileStore + Clone + 'static,
    B: BlobStore,
{
    pub fn new(identity_gateway: I, profiles: P, blobs: B, config: ReconcilerConfig) -> Self {
        let (decision_tx, decision_rx) = watch::channel(Decision::default());

        Self {
            identity_gateway,
            profiles,
            blobs,
            config,
            state: Mutex::new(SessionState::default()),
            generation: AtomicU64::new(0),
            decision_tx,
            decision_rx,
        }
    }

    /// Subscribe to published decisions. A new receiver observes the
    /// current decision immediately.
    pub fn subscribe(&self) -> watch::Receiver<Decision> {
        self.decision_rx.clone()
    }

    /// The decision currently in force.
    pub fn decision(&self) -> Decision {
        self.decision_rx.borrow().clone()
    }

    /// Consume the identity gateway's auth-state stream.
    ///
    /// Single consumer; the application spawns this once and leaves it
    /// running for the life of the session.
    pub async fn run(&self) {
        let mut events = self.identity_gateway.subscribe();

        loop {
            let identity = events.borrow_and_update().clone();
            self.on_auth_transition(identity).await;

            if events.changed().await.is_err() {
                info!("Auth event stream closed");
                break;
            }
        }
    }

    /// Handle one auth-state transition.
    ///
    /// Never fails outward: fetch errors and timeouts degrade to an
    /// unknown profile and a decision is always committed (unless a newer
    /// transition superseded this one in the meantime).
    pub async fn on_auth_transition(&self, identity: Option<UserIdentity>) {
        let generation = self.next_generation();

        match identity {
            None => {
                debug!("Auth transition: signed out");
                self.commit(generation, None, ProfileSnapshot::Absent).await;
            }
            Some(identity) => {
                debug!("Auth transition: signed in as {}", identity.uid);
                let snapshot = self.fetch_snapshot(&identity).await;
                self.commit(generation, Some(identity), snapshot).await;
            }
        }
    }

    /// Run the interactive popup sign-in, bounded by the configured
    /// timeout.
    ///
    /// The redirect intent is recorded before the popup opens so the
    /// provider's auth-state event cannot outrun it; a failed sign-in
    /// abandons the intent. On success the profile record is ensured to
    /// exist (seeded if absent) before this returns - unlike the passive
    /// path, which never blocks on the seed write. Both paths upsert by
    /// user id, so racing them is safe.
    pub async fn sign_in_interactive(
        &self,
        with_dashboard_redirect: bool,
    ) -> SessionResult<ProfileRecord> {
        if with_dashboard_redirect {
            self.state.lock().await.pending_redirect = true;
        }

        let sign_in_timeout = self.config.sign_in_timeout();
        let outcome = timeout(sign_in_timeout, self.identity_gateway.sign_in_interactive()).await;

        let identity = match outcome {
            Ok(Ok(identity)) => identity,
            Ok(Err(error)) => {
                self.abandon_redirect().await;
                return Err(error.into());
            }
            Err(_) => {
                self.abandon_redirect().await;
                return Err(AuthError::timed_out(sign_in_timeout.as_millis() as u64).into());
            }
        };

        info!("Interactive sign-in succeeded for {}", identity.uid);

        let record = match self.profiles.get(&identity.uid).await? {
            Some(record) => record,
            None => {
                let seed = ProfileRecord::seed(&identity);
                self.profiles.create(&identity.uid, seed.clone()).await?;
                // Re-read: a racing seed may have merged fields
                self.profiles.get(&identity.uid).await?.unwrap_or(seed)
            }
        };

        Ok(record)
    }

    /// Sign out and force the public decision.
    ///
    /// On gateway failure the current decision is left untouched and the
    /// error is surfaced.
    pub async fn sign_out(&self) -> SessionResult<()> {
        self.identity_gateway.sign_out().await?;

        let generation = self.next_generation();
        self.commit(generation, None, ProfileSnapshot::Absent).await;

        info!("Signed out");
        Ok(())
    }

    /// Merge-write the required profile fields and open the dashboard.
    pub async fn complete_profile(&self, completion: ProfileCompletion) -> SessionResult<()> {
        completion.validate()?;

        let identity = self.require_identity().await?;
        self.profiles
            .update(&identity.uid, ProfileUpdate::from(completion))
            .await?;

        // The write succeeded; a failed refresh read must not block the
        // dashboard transition
        let record = self
            .profiles
            .get(&identity.uid)
            .await
            .unwrap_or_else(|error| {
                warn!("Post-completion read failed for {}: {error}", identity.uid);
                None
            });

        let mut state = self.state.lock().await;
        if state.identity.as_ref().map(|i| &i.uid) != Some(&identity.uid) {
            // Signed out while the write was in flight; nothing to show
            return Ok(());
        }

        state.profile = match record {
            Some(record) => ProfileSnapshot::Loaded(record),
            None => ProfileSnapshot::Unknown,
        };
        // The redirect intent (if any) is satisfied by showing the dashboard
        state.pending_redirect = false;
        self.publish(&state, UiMode::Dashboard);

        info!("Profile completed for {}", identity.uid);
        Ok(())
    }

    /// Merge-write profile edits; the decision is left unchanged.
    pub async fn update_profile(&self, changes: ProfileUpdate) -> SessionResult<()> {
        let identity = self.require_identity().await?;
        self.profiles.update(&identity.uid, changes).await?;

        self.refresh_snapshot(&identity).await;

        info!("Profile updated for {}", identity.uid);
        Ok(())
    }

    /// Upload an avatar image, resolve its public URL and record it on
    /// the profile. Returns the URL.
    pub async fn upload_avatar(&self, bytes: Vec<u8>) -> SessionResult<String> {
        let identity = self.require_identity().await?;

        let key = format!("{AVATAR_KEY_PREFIX}/{}", identity.uid);
        self.blobs.upload(&key, bytes).await?;
        let url = self.blobs.resolve_url(&key).await?;

        self.profiles
            .update(
                &identity.uid,
                ProfileUpdate {
                    photo_url: Some(url.clone()),
                    ..ProfileUpdate::default()
                },
            )
            .await?;

        self.refresh_snapshot(&identity).await;

        info!("Avatar uploaded for {}", identity.uid);
        Ok(url)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetch the profile, racing the configured timeout. Exactly one of
    /// three outcomes: loaded, absent (with a fire-and-forget seed), or
    /// unknown.
    async fn fetch_snapshot(&self, identity: &UserIdentity) -> ProfileSnapshot {
        let fetch_timeout = self.config.profile_fetch_timeout();

        match timeout(fetch_timeout, self.profiles.get(&identity.uid)).await {
            Ok(Ok(Some(record))) => ProfileSnapshot::Loaded(record),
            Ok(Ok(None)) => {
                // Seed without blocking the decision; the record is
                // already effectively incomplete either way
                let profiles = self.profiles.clone();
                let seed = ProfileRecord::seed(identity);
                let uid = identity.uid.clone();
                tokio::spawn(async move {
                    if let Err(error) = profiles.create(&uid, seed).await {
                        warn!("Seed profile write failed for {uid}: {error}");
                    }
                });
                ProfileSnapshot::Absent
            }
            Ok(Err(error)) => {
                warn!("Profile fetch failed for {}: {error}", identity.uid);
                ProfileSnapshot::Unknown
            }
            Err(_) => {
                warn!(
                    "Profile fetch timed out after {}ms for {}",
                    fetch_timeout.as_millis(),
                    identity.uid
                );
                ProfileSnapshot::Unknown
            }
        }
    }

    /// Commit a transition unless a newer one has superseded it, then
    /// publish the resulting decision.
    async fn commit(
        &self,
        generation: u64,
        identity: Option<UserIdentity>,
        snapshot: ProfileSnapshot,
    ) {
        let mut state = self.state.lock().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Dropping stale transition (generation {generation})");
            return;
        }

        state.identity = identity;
        state.profile = snapshot;

        let (mode, pending_redirect) =
            decide(state.identity.is_some(), &state.profile, state.pending_redirect);
        state.pending_redirect = pending_redirect;

        self.publish(&state, mode);
    }

    fn publish(&self, state: &SessionState, mode: UiMode) {
        let decision = Decision {
            mode,
            identity: state.identity.clone(),
            profile: state.profile.record().cloned(),
        };

        info!("Decision: {mode}");
        let _ = self.decision_tx.send(decision);
    }

    /// Re-read the record and republish the current mode so display
    /// fields refresh without a mode change.
    async fn refresh_snapshot(&self, identity: &UserIdentity) {
        let record = match self.profiles.get(&identity.uid).await {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(error) => {
                warn!("Snapshot refresh failed for {}: {error}", identity.uid);
                return;
            }
        };

        let mut state = self.state.lock().await;
        if state.identity.as_ref().map(|i| &i.uid) != Some(&identity.uid) {
            return;
        }

        state.profile = ProfileSnapshot::Loaded(record);
        let mode = self.decision_rx.borrow().mode;
        self.publish(&state, mode);
    }

    async fn require_identity(&self) -> SessionResult<UserIdentity> {
        self.state
            .lock()
            .await
            .identity
            .clone()
            .ok_or_else(SessionError::not_authenticated)
    }

    async fn abandon_redirect(&self) {
        self.state.lock().await.pending_redirect = false;
    }
}
