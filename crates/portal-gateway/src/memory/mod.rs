//! In-memory gateway implementations.
//!
//! Stand-ins for the hosted identity/document/blob platform, used by the
//! test suites and the demo shell. Latency and failures are injectable so
//! callers can exercise their timeout races and degradation paths.

mod blobs;
mod identity;
mod profiles;

pub use blobs::MemoryBlobStore;
pub use identity::{MemoryIdentityGateway, SignInOutcome};
pub use profiles::MemoryProfileStore;
