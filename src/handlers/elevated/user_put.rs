// handlers/elevated/user_put.rs - PUT /api/users/:id handler

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::user::User;
use crate::error::ApiError;
use crate::handlers::extract::JsonBody;
use crate::handlers::utils::{load_user, overwrite, truthy, UserMessage};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_seller: Option<Value>,
    pub is_admin: Option<Value>,
}

impl AdminUpdateRequest {
    /// Non-empty strings overwrite; present flags overwrite with their truthiness
    fn apply(self, user: &mut User) {
        overwrite(&mut user.name, self.name);
        overwrite(&mut user.email, self.email);

        if let Some(is_seller) = self.is_seller {
            user.is_seller = truthy(Some(&is_seller));
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = truthy(Some(&is_admin));
        }
    }
}

/// PUT /api/users/:id - Administrative edit of any record
///
/// Expected Input:
/// ```json
/// { "name": "string?", "email": "string?", "isSeller": "bool?", "isAdmin": "bool?" }
/// ```
///
/// `isAdmin: false` demotes. Seller details are left untouched; the
/// owner fills them in through the profile route.
pub async fn user_put(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AdminUpdateRequest>,
) -> Result<Json<UserMessage>, ApiError> {
    let mut user = load_user(state.store.as_ref(), &id).await?;
    let was_admin = user.is_admin;

    payload.apply(&mut user);
    if user.is_admin != was_admin {
        tracing::info!(
            "User {} changed isAdmin of user {} to {}",
            auth_user.id,
            user.id,
            user.is_admin
        );
    }

    let updated = state.store.save(&user).await?;
    Ok(Json(UserMessage::new("User Updated", updated)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::user::NewUser;
    use serde_json::json;

    fn admin_user() -> User {
        let mut new_user = NewUser::new("Root", "root@example.com", "h");
        new_user.is_admin = true;
        new_user.is_seller = true;
        User::from_new(new_user)
    }

    fn request(body: Value) -> AdminUpdateRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn absent_fields_keep_stored_values() {
        let mut user = admin_user();
        request(json!({"name": "Root 2"})).apply(&mut user);

        assert_eq!(user.name, "Root 2");
        assert!(user.is_admin);
        assert!(user.is_seller);
    }

    #[test]
    fn present_flags_are_coerced() {
        let mut user = admin_user();
        request(json!({"isAdmin": 0, "isSeller": ""})).apply(&mut user);
        assert!(!user.is_admin);
        assert!(!user.is_seller);

        request(json!({"isAdmin": "yes", "isSeller": 1})).apply(&mut user);
        assert!(user.is_admin);
        assert!(user.is_seller);
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut user = admin_user();
        request(json!({"name": "", "email": ""})).apply(&mut user);
        assert_eq!(user.name, "Root");
        assert_eq!(user.email, "root@example.com");
    }
}
