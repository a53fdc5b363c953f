use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::IdentityError;
use crate::model::User;
use crate::password::{hash_password, verify_password};
use crate::store::{StoredUser, UserStore};

/// Identity session service: registration and credential checks against
/// the persisted user list. Produces session `User` values; the returned
/// value never carries password material.
#[derive(Clone)]
pub struct Service {
    store: Arc<UserStore>,
}

impl Service {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    #[instrument(name = "identity.service.register", skip(self, password), fields(email = %email))]
    pub fn register(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        info!("Registering user");

        if self.store.find_by_email(email).is_some() {
            return Err(IdentityError::already_exists(email));
        }

        let user = User {
            id: generate_user_id("usr"),
            email: email.to_string(),
            is_authenticated: true,
        };
        let password_hash =
            hash_password(password).map_err(|e| IdentityError::storage(e.to_string()))?;

        self.store
            .insert(StoredUser {
                id: user.id.clone(),
                email: user.email.clone(),
                password_hash: Some(password_hash),
                is_social: false,
            })
            .map_err(|e| IdentityError::storage(e.to_string()))?;

        info!("Successfully registered user with id={}", user.id);
        Ok(user)
    }

    #[instrument(name = "identity.service.login", skip(self, password), fields(email = %email))]
    pub fn login(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        info!("Logging in user");

        // Email match is exact and case-sensitive.
        let stored = self
            .store
            .find_by_email(email)
            .ok_or_else(IdentityError::invalid_credentials)?;

        let hash = stored
            .password_hash
            .as_deref()
            .ok_or_else(IdentityError::invalid_credentials)?;
        let verified =
            verify_password(password, hash).map_err(|e| IdentityError::storage(e.to_string()))?;
        if !verified {
            return Err(IdentityError::invalid_credentials());
        }

        info!("Successfully logged in user with id={}", stored.id);
        Ok(User {
            id: stored.id,
            email: stored.email,
            is_authenticated: true,
        })
    }

    /// Demo stand-in for a federated login flow: fabricates a pseudo-random
    /// address and creates the user on first occurrence. Not suitable
    /// outside a demo environment.
    #[instrument(name = "identity.service.login_with_google", skip(self))]
    pub fn login_with_google(&self) -> Result<User, IdentityError> {
        info!("Logging in via federated stand-in");

        let email = format!(
            "google_user_{}@gmail.com",
            &Uuid::new_v4().simple().to_string()[..4]
        );

        if let Some(existing) = self.store.find_by_email(&email) {
            return Ok(User {
                id: existing.id,
                email: existing.email,
                is_authenticated: true,
            });
        }

        let user = User {
            id: generate_user_id("goog"),
            email,
            is_authenticated: true,
        };
        self.store
            .insert(StoredUser {
                id: user.id.clone(),
                email: user.email.clone(),
                password_hash: None,
                is_social: true,
            })
            .map_err(|e| IdentityError::storage(e.to_string()))?;

        Ok(user)
    }
}

/// Opaque, prefixed user id (e.g. `usr_4f3c21a9b`).
fn generate_user_id(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().simple().to_string()[..9])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_service(dir: &tempfile::TempDir) -> Service {
        Service::new(Arc::new(UserStore::new(dir.path().join("users.json"))))
    }

    #[test]
    fn register_login_round_trip() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        let registered = service.register("a@x.com", "pw1").unwrap();
        assert_eq!(registered.email, "a@x.com");
        assert!(registered.is_authenticated);
        assert!(registered.id.starts_with("usr_"));

        let logged_in = service.login("a@x.com", "pw1").unwrap();
        assert_eq!(logged_in.id, registered.id);
        assert_eq!(logged_in.email, "a@x.com");
    }

    #[test]
    fn register_duplicate_email_fails() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        service.register("a@x.com", "pw1").unwrap();
        let result = service.register("a@x.com", "pw2");
        assert!(matches!(
            result,
            Err(IdentityError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn login_wrong_password_fails() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        service.register("a@x.com", "pw1").unwrap();
        let result = service.login("a@x.com", "wrong");
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[test]
    fn login_unknown_email_fails() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        let result = service.login("nobody@x.com", "pw");
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        service.register("a@x.com", "pw1").unwrap();
        let result = service.login("A@X.COM", "pw1");
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[test]
    fn raw_password_never_reaches_disk() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        service.register("a@x.com", "hunter2-secret").unwrap();

        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(!raw.contains("hunter2-secret"));
        assert!(raw.contains("$argon2"));
    }

    #[test]
    fn federated_login_creates_a_social_user() {
        let dir = tempdir().unwrap();
        let service = create_test_service(&dir);

        let user = service.login_with_google().unwrap();
        assert!(user.id.starts_with("goog_"));
        assert!(user.email.starts_with("google_user_"));
        assert!(user.email.ends_with("@gmail.com"));

        let store = UserStore::new(dir.path().join("users.json"));
        let stored = store.find_by_email(&user.email).unwrap();
        assert!(stored.is_social);
        assert!(stored.password_hash.is_none());
    }
}
