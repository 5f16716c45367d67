use thiserror::Error;

use crate::auth::password::{hash_password, PasswordError};
use crate::database::models::user::NewUser;

/// Demo accounts shipped with the binary
const DEMO_USERS: &str = include_str!("../../fixtures/users.yaml");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed fixture: {0}")]
    Fixture(#[from] serde_yaml::Error),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Parse a YAML fixture and hash every plaintext password in it
pub fn load_fixture(yaml: &str) -> Result<Vec<NewUser>, SeedError> {
    let users: Vec<NewUser> = serde_yaml::from_str(yaml)?;
    users
        .into_iter()
        .map(|mut user| -> Result<NewUser, SeedError> {
            user.password = hash_password(&user.password)?;
            Ok(user)
        })
        .collect()
}

/// The fixed demo user list, ready for `UserStore::insert_many`
pub fn demo_users() -> Result<Vec<NewUser>, SeedError> {
    load_fixture(DEMO_USERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn demo_users_include_protected_admin() {
        let users = demo_users().unwrap();
        let admin = users.iter().find(|u| u.email == "admin@example.com").unwrap();

        assert!(admin.is_admin);
        assert!(verify_password("1234", &admin.password));
        assert!(users.iter().any(|u| !u.is_admin && !u.is_seller));
    }

    #[test]
    fn missing_flags_default_to_false() {
        let users = load_fixture("- name: A\n  email: a@x.com\n  password: pw\n").unwrap();
        assert_eq!(users.len(), 1);
        assert!(!users[0].is_admin);
        assert!(!users[0].is_seller);
        assert_eq!(users[0].seller.store_name, "");
        assert_ne!(users[0].password, "pw");
    }

    #[test]
    fn rejects_malformed_fixture() {
        assert!(matches!(load_fixture("- name: [unclosed"), Err(SeedError::Fixture(_))));
    }
}
