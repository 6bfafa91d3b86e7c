mod config;
mod error;
mod log_level;
mod logging_config;
mod reconciler_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use reconciler_config::ReconcilerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_PROFILE_FETCH_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_SIGN_IN_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_COLORED: bool = true;

const MIN_PROFILE_FETCH_TIMEOUT_MS: u64 = 100;
const MAX_PROFILE_FETCH_TIMEOUT_MS: u64 = 60_000;
const MIN_SIGN_IN_TIMEOUT_MS: u64 = 1_000;
const MAX_SIGN_IN_TIMEOUT_MS: u64 = 120_000;
