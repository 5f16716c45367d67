// handlers/elevated/user_delete.rs - DELETE /api/users/:id handler

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::error::ApiError;
use crate::handlers::utils::{load_user, UserMessage};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// This account can never be deleted, whoever asks
pub const PROTECTED_ADMIN_EMAIL: &str = "admin@example.com";

/// DELETE /api/users/:id - Remove a user record
///
/// Responds 404 when the record is missing and 400 for the protected admin
/// account.
pub async fn user_delete(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<UserMessage>, ApiError> {
    let user = load_user(state.store.as_ref(), &id).await?;

    if user.email == PROTECTED_ADMIN_EMAIL {
        tracing::warn!("User {} tried to delete the protected admin account", auth_user.id);
        return Err(ApiError::bad_request("Can Not Delete Admin User"));
    }

    let deleted = state
        .store
        .delete(user.id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    tracing::info!("User {} deleted user {}", auth_user.id, deleted.id);
    Ok(Json(UserMessage::new("User Deleted", deleted)))
}
