// handlers/protected/profile.rs - PUT /api/users/profile handler

use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::auth::password::hash_password_async;
use crate::database::models::user::{Identity, User};
use crate::error::ApiError;
use crate::handlers::extract::JsonBody;
use crate::handlers::utils::overwrite;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub seller_store_name: Option<String>,
    pub seller_city: Option<String>,
    pub seller_province: Option<String>,
    pub seller_country: Option<String>,
    pub seller_store_address: Option<String>,
    pub seller_phone_number: Option<String>,
    pub seller_business_type: Option<String>,
    #[serde(rename = "sellerCAC")]
    pub seller_cac: Option<String>,
}

impl ProfileRequest {
    /// Merge the request over `user`. Seller fields only apply to sellers.
    /// The password is not touched here; see `take_password`.
    fn apply(self, user: &mut User) {
        overwrite(&mut user.name, self.name);
        overwrite(&mut user.email, self.email);

        if user.is_seller {
            let seller = &mut user.seller;
            overwrite(&mut seller.store_name, self.seller_store_name);
            overwrite(&mut seller.city, self.seller_city);
            overwrite(&mut seller.province, self.seller_province);
            overwrite(&mut seller.country, self.seller_country);
            overwrite(&mut seller.store_address, self.seller_store_address);
            overwrite(&mut seller.phone_number, self.seller_phone_number);
            overwrite(&mut seller.business_type, self.seller_business_type);
            overwrite(&mut seller.cac, self.seller_cac);
        }
    }

    /// The new plaintext password, if one was given
    fn take_password(&mut self) -> Option<String> {
        self.password.take().filter(|p| !p.is_empty())
    }
}

/// PUT /api/users/profile - Update the caller's own record
///
/// Absent or empty fields keep their stored value. Responds with the
/// identity projection and a freshly issued token. A caller whose record
/// has disappeared since the token was issued gets 404.
pub async fn profile_put(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    JsonBody(mut payload): JsonBody<ProfileRequest>,
) -> Result<Json<Identity>, ApiError> {
    let mut user = state
        .store
        .find_by_id(auth_user.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Profile update for missing user {}", auth_user.id);
            ApiError::user_not_found()
        })?;

    let new_password = payload.take_password();
    payload.apply(&mut user);
    if let Some(password) = new_password {
        user.password = hash_password_async(password).await?;
    }
    let updated = state.store.save(&user).await?;

    let token = state.tokens.issue(&updated)?;
    Ok(Json(Identity::new(&updated, token)))
}
