// handlers/utils.rs - Helpers shared by the user handlers

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::models::user::User;
use crate::database::UserStore;
use crate::error::ApiError;

/// `{ "message": ..., "user": {...} }` body used by the admin and vendor routes
#[derive(Debug, Serialize)]
pub struct UserMessage {
    pub message: &'static str,
    pub user: User,
}

impl UserMessage {
    pub fn new(message: &'static str, user: User) -> Self {
        Self { message, user }
    }
}

/// Load a user by path id. Ids that cannot be parsed are simply absent.
pub async fn load_user(store: &dyn UserStore, raw_id: &str) -> Result<User, ApiError> {
    let id = Uuid::parse_str(raw_id).map_err(|_| ApiError::user_not_found())?;
    store
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::user_not_found)
}

/// JSON truthiness: null, false, 0, "" and absent are false
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Replace `target` only when the incoming value is present and non-empty
pub fn overwrite(target: &mut String, incoming: Option<String>) {
    if let Some(value) = incoming.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_json_coercion() {
        assert!(!truthy(None));
        assert!(!truthy(Some(&Value::Null)));
        assert!(!truthy(Some(&json!(false))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));

        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("false"))));
        assert!(truthy(Some(&json!([]))));
        assert!(truthy(Some(&json!({}))));
    }

    #[test]
    fn overwrite_ignores_missing_and_empty() {
        let mut name = "Ada".to_string();
        overwrite(&mut name, None);
        assert_eq!(name, "Ada");
        overwrite(&mut name, Some(String::new()));
        assert_eq!(name, "Ada");
        overwrite(&mut name, Some("Grace".into()));
        assert_eq!(name, "Grace");
    }
}
