pub mod admin;
pub mod auth;

pub use admin::{authorize_admin, require_admin};
pub use auth::{authenticate, bearer_token, require_auth, AuthUser};
