use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storefront details, meaningful only once `is_seller` is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seller {
    pub store_name: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub store_address: String,
    pub phone_number: String,
    pub business_type: String,
    pub cac: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Never leaves the process.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub is_admin: bool,
    pub is_seller: bool,
    pub seller: Seller,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_seller: bool,
    #[serde(default)]
    pub seller: Seller,
}

impl NewUser {
    /// Plain account: not an admin, not a seller
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password_hash.into(),
            is_admin: false,
            is_seller: false,
            seller: Seller::default(),
        }
    }
}

impl User {
    /// Materialize a freshly inserted record
    pub fn from_new(new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
            is_admin: new_user.is_admin,
            is_seller: new_user.is_seller,
            seller: new_user.seller,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public-safe view returned by sign-in, register and profile update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_seller: bool,
    pub token: String,
}

impl Identity {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            is_seller: user.is_seller,
            token,
        }
    }
}
