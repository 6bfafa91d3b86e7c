//! Contract with the external federated identity provider.

use crate::AuthResult;

use portal_core::UserIdentity;

use async_trait::async_trait;
use tokio::sync::watch;

/// The identity provider surface the session layer depends on.
///
/// The gateway owns no session state of its own; it reports what the
/// provider says and emits auth-state events over the subscription channel.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Open the interactive popup flow; resolves to the signed-in identity.
    async fn sign_in_interactive(&self) -> AuthResult<UserIdentity>;

    /// End the provider session.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Auth-state stream. A new receiver observes the current state
    /// immediately, then every change (sign-in, sign-out, session restore).
    fn subscribe(&self) -> watch::Receiver<Option<UserIdentity>>;
}
