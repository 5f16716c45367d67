// handlers/public/seed.rs - GET /api/users/seed handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::password::PasswordError;
use crate::database::models::user::User;
use crate::database::seed;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub created_users: Vec<User>,
}

/// GET /api/users/seed - bulk-insert the demo accounts
///
/// Fails with 500 when any demo email already exists; nothing is inserted
/// in that case.
pub async fn seed_get(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    // Hashing the fixture passwords is CPU-bound
    let demo_users = tokio::task::spawn_blocking(seed::demo_users)
        .await
        .map_err(PasswordError::from)?;
    let created_users = state.store.insert_many(demo_users?).await?;
    tracing::info!("Seeded {} demo users", created_users.len());

    Ok(Json(SeedResponse { created_users }))
}
