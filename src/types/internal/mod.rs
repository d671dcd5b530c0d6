pub mod context;
pub mod login;
pub mod user;

pub use context::{RequestContext, RequestSource};
pub use login::{LoginFailure, LoginResult};
pub use user::{UserRecord, UserStatus};
