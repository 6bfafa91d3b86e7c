pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::profile_completion::ProfileCompletion;
pub use models::profile_record::ProfileRecord;
pub use models::profile_update::ProfileUpdate;
pub use models::ui_mode::UiMode;
pub use models::user_id::UserId;
pub use models::user_identity::UserIdentity;
