// handlers/public/signin.rs - POST /api/users/signin handler

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::auth::password::{hash_password, verify_password_async};
use crate::database::models::user::Identity;
use crate::error::ApiError;
use crate::handlers::extract::JsonBody;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Verified against when the email is unknown, so both failure paths cost the same
static DECOY_HASH: Lazy<String> = Lazy::new(|| hash_password("decoy-password").unwrap_or_default());

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/users/signin - Authenticate and receive a token
///
/// Expected Input:
/// ```json
/// { "email": "string", "password": "string" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "id": "uuid", "name": "...", "email": "...", "isAdmin": false, "isSeller": false, "token": "eyJ..." }
/// ```
///
/// Unknown email and wrong password both answer 401 with the same message.
pub async fn signin_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SignInRequest>,
) -> Result<Json<Identity>, ApiError> {
    let user = state.store.find_by_email(&payload.email).await?;

    let user = match user {
        Some(user) => {
            if !verify_password_async(payload.password, user.password.clone()).await {
                tracing::warn!("Sign-in failed: wrong password for {}", payload.email);
                return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
            }
            user
        }
        None => {
            let _ = verify_password_async(payload.password, DECOY_HASH.clone()).await;
            tracing::warn!("Sign-in failed: unknown email {}", payload.email);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let token = state.tokens.issue(&user)?;
    tracing::info!("User {} signed in", user.id);
    Ok(Json(Identity::new(&user, token)))
}
