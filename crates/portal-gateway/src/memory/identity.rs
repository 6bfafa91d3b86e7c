use crate::{AuthError, AuthResult, IdentityGateway};

use portal_core::UserIdentity;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};
use tracing::debug;

/// Scripted outcome for the next interactive sign-in call.
#[derive(Debug, Clone)]
pub enum SignInOutcome {
    /// Popup resolves with the configured account
    Success,
    /// User dismissed the popup
    Cancelled,
    /// Browser blocked the popup
    Blocked,
    /// Provider-side failure surfaced with its error code
    Provider { code: String },
    /// Popup never settles (exercises the caller's timeout race)
    Hang,
}

/// In-memory identity provider.
///
/// Successful sign-ins resolve to the configured account and push the new
/// auth state onto the subscription channel, exactly like the hosted
/// provider's popup flow followed by its auth-state callback.
#[derive(Clone)]
pub struct MemoryIdentityGateway {
    inner: Arc<Inner>,
}

struct Inner {
    account: UserIdentity,
    outcomes: Mutex<VecDeque<SignInOutcome>>,
    latency: Mutex<Duration>,
    state_tx: watch::Sender<Option<UserIdentity>>,
    // Retained so the watch channel always has a live receiver; otherwise
    // `state_tx.send` no-ops whenever no external subscriber exists.
    _state_rx: watch::Receiver<Option<UserIdentity>>,
}

impl MemoryIdentityGateway {
    /// Create a gateway whose popup resolves to `account`.
    pub fn new(account: UserIdentity) -> Self {
        let (state_tx, state_rx) = watch::channel(None);

        Self {
            inner: Arc::new(Inner {
                account,
                outcomes: Mutex::new(VecDeque::new()),
                latency: Mutex::new(Duration::ZERO),
                state_tx,
                _state_rx: state_rx,
            }),
        }
    }

    /// Script the outcome of an upcoming sign-in call (FIFO; defaults to
    /// `Success` when the queue is empty).
    pub async fn push_outcome(&self, outcome: SignInOutcome) {
        self.inner.outcomes.lock().await.push_back(outcome);
    }

    /// Delay applied before the popup settles.
    pub async fn set_latency(&self, latency: Duration) {
        *self.inner.latency.lock().await = latency;
    }

    /// Push a raw auth-state event (simulates a session restore).
    pub fn emit(&self, identity: Option<UserIdentity>) {
        let _ = self.inner.state_tx.send(identity);
    }

    /// The auth state the provider currently reports.
    pub fn current(&self) -> Option<UserIdentity> {
        self.inner.state_tx.borrow().clone()
    }
}

#[async_trait]
impl IdentityGateway for MemoryIdentityGateway {
    async fn sign_in_interactive(&self) -> AuthResult<UserIdentity> {
        let latency = *self.inner.latency.lock().await;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let outcome = self
            .inner
            .outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(SignInOutcome::Success);

        match outcome {
            SignInOutcome::Success => {
                let identity = self.inner.account.clone();
                debug!("Popup sign-in resolved for {}", identity.uid);
                let _ = self.inner.state_tx.send(Some(identity.clone()));
                Ok(identity)
            }
            SignInOutcome::Cancelled => Err(AuthError::cancelled()),
            SignInOutcome::Blocked => Err(AuthError::blocked()),
            SignInOutcome::Provider { code } => {
                Err(AuthError::provider(code, "simulated provider failure"))
            }
            SignInOutcome::Hang => {
                std::future::pending::<()>().await;
                unreachable!("pending future never resolves")
            }
        }
    }

    async fn sign_out(&self) -> AuthResult<()> {
        debug!("Provider session ended");
        let _ = self.inner.state_tx.send(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserIdentity>> {
        self.inner.state_tx.subscribe()
    }
}
