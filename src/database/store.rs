use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::user::{NewUser, User};

/// Errors from a user store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence operations on user records.
///
/// Every call is a single logical read or write; concurrent saves to the
/// same record are last-write-wins.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert one record, assigning its id and timestamps
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Insert a batch of records
    async fn insert_many(&self, new_users: Vec<NewUser>) -> Result<Vec<User>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Exact (case-sensitive) email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// All records in insertion order
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Persist every mutable field of `user` and bump `updated_at`
    async fn save(&self, user: &User) -> Result<User, StoreError>;

    /// Remove a record, returning it if it existed
    async fn delete(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Cheap liveness probe for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}
