// handlers/elevated/users_list.rs - GET /api/users handler

use axum::{extract::State, Json};

use crate::database::models::user::User;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/users - every record in the store
pub async fn users_list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.store.list().await?))
}
