use axum::{extract::Request, middleware::Next, response::Response};

use super::auth::AuthUser;
use crate::error::ApiError;

/// RequireAdmin: must be layered inside `require_auth`.
///
/// Decides on the token's claims alone, so a promotion after issuance
/// does not take effect until a new token is issued.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    authorize_admin(request.extensions().get::<AuthUser>())?;
    Ok(next.run(request).await)
}

pub fn authorize_admin(auth_user: Option<&AuthUser>) -> Result<(), ApiError> {
    match auth_user {
        Some(user) if user.is_admin => Ok(()),
        Some(user) => {
            tracing::warn!("Admin route refused for non-admin user {}", user.id);
            Err(ApiError::unauthorized("Invalid Admin Token"))
        }
        None => Err(ApiError::unauthorized("Invalid Admin Token")),
    }
}
