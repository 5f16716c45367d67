// handlers/public/user_get.rs - GET /api/users/:id handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::user::User;
use crate::error::ApiError;
use crate::handlers::utils::load_user;
use crate::state::AppState;

/// GET /api/users/:id - show a single record (without the password hash)
pub async fn user_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = load_user(state.store.as_ref(), &id).await?;
    Ok(Json(user))
}
