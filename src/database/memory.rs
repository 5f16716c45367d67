use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::user::{NewUser, User};
use crate::database::store::{StoreError, UserStore};

/// Process-local store used when no database is configured, and by tests
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_email_free(users: &[User], email: &str, except: Option<Uuid>) -> Result<(), StoreError> {
        let taken = users
            .iter()
            .any(|u| u.email == email && Some(u.id) != except);
        if taken {
            return Err(StoreError::Constraint(format!("duplicate email: {}", email)));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        Self::check_email_free(&users, &new_user.email, None)?;

        let user = User::from_new(new_user);
        users.push(user.clone());
        Ok(user)
    }

    async fn insert_many(&self, new_users: Vec<NewUser>) -> Result<Vec<User>, StoreError> {
        let mut users = self.users.write().await;

        // Validate the whole batch before touching the collection
        let mut staged: Vec<User> = Vec::with_capacity(new_users.len());
        for new_user in new_users {
            Self::check_email_free(&users, &new_user.email, None)?;
            Self::check_email_free(&staged, &new_user.email, None)?;
            staged.push(User::from_new(new_user));
        }

        users.extend(staged.iter().cloned());
        Ok(staged)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        Self::check_email_free(&users, &user.email, Some(user.id))?;

        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(StoreError::NotFound(user.id))?;

        let mut saved = user.clone();
        saved.created_at = slot.created_at;
        saved.updated_at = Utc::now();
        *slot = saved.clone();
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        let index = users.iter().position(|u| u.id == id);
        Ok(index.map(|i| users.remove(i)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
