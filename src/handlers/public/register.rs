// handlers/public/register.rs - POST /api/users/register handler

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::password::hash_password_async;
use crate::database::models::user::{Identity, NewUser};
use crate::error::ApiError;
use crate::handlers::extract::JsonBody;
use crate::state::AppState;

/// Only these fields are read; anything else in the body (e.g. `isAdmin`) is ignored
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/users/register - Create an account and sign it in
///
/// Expected Input:
/// ```json
/// { "name": "string", "email": "string", "password": "string" }
/// ```
///
/// The new record is never an admin or a seller. Store failures such as a
/// duplicate email surface as 500.
pub async fn register_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<Json<Identity>, ApiError> {
    let password_hash = hash_password_async(payload.password).await?;
    let created = state
        .store
        .insert(NewUser::new(payload.name, payload.email, password_hash))
        .await?;

    let token = state.tokens.issue(&created)?;
    tracing::info!("Registered user {}", created.id);
    Ok(Json(Identity::new(&created, token)))
}
