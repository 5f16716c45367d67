// handlers/protected/vendor.rs - PUT /api/users/vendor/:id handler

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::handlers::extract::OptionalJsonBody;
use crate::handlers::utils::{load_user, truthy, UserMessage};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRequest {
    pub is_seller: Option<Value>,
}

/// PUT /api/users/vendor/:id - Opt a user in or out of selling
///
/// Any authenticated caller may flip any user's seller flag. The flag is
/// set to the truthiness of `isSeller`; leaving it out, or sending no body
/// at all, clears the flag.
pub async fn vendor_put(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
    OptionalJsonBody(payload): OptionalJsonBody<VendorRequest>,
) -> Result<Json<UserMessage>, ApiError> {
    let mut user = load_user(state.store.as_ref(), &id).await?;

    user.is_seller = truthy(payload.is_seller.as_ref());
    if auth_user.id != user.id {
        tracing::info!(
            "User {} set isSeller={} on user {}",
            auth_user.id,
            user.is_seller,
            user.id
        );
    }

    let updated = state.store.save(&user).await?;
    Ok(Json(UserMessage::new("User Updated", updated)))
}
