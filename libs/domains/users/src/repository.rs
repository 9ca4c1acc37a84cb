use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Fails with [`UserError::NotFound`] when absent
    async fn get_by_id(&self, id: i64) -> UserResult<User>;

    /// Absence is not an error
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert; storage assigns the id and both timestamps
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Persist the full representation of an existing user (last write wins)
    async fn update(&self, user: User) -> UserResult<User>;

    async fn delete(&self, id: i64) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory implementation of UserRepository (for development/testing).
///
/// Enforces the same email uniqueness as the SQL schema.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.email_taken(&input.email, None) {
            return Err(UserError::DuplicateEmail(input.email));
        }

        store.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: store.last_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        };
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        let Some(existing) = store.users.get(&user.id) else {
            return Err(UserError::NotFound(user.id));
        };
        user.created_at = existing.created_at;

        if store.email_taken(&user.email, Some(user.id)) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        user.updated_at = Utc::now();
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_none() {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let a = repo.create(input("A", "a@x.com")).await.unwrap();
        let b = repo.create(input("B", "b@x.com")).await.unwrap();

        assert!(b.id > a.id);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(repo.get_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn create_rejects_taken_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("A", "a@x.com")).await.unwrap();

        let err = repo.create(input("A2", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, UserError::DuplicateEmail(e) if e == "a@x.com"));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(input("A", "a@x.com")).await.unwrap();
        repo.delete(a.id).await.unwrap();

        let b = repo.create(input("B", "b@x.com")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_checks_uniqueness() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(input("A", "a@x.com")).await.unwrap();
        repo.create(input("B", "b@x.com")).await.unwrap();

        let mut changed = a.clone();
        changed.name = "Alice".into();
        let updated = repo.update(changed).await.unwrap();
        assert_eq!(updated.created_at, a.created_at);
        assert!(updated.updated_at >= updated.created_at);

        let mut clash = updated;
        clash.email = "b@x.com".into();
        let err = repo.update(clash).await.unwrap_err();
        assert!(matches!(err, UserError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let repo = InMemoryUserRepository::new();

        assert!(matches!(repo.get_by_id(9).await, Err(UserError::NotFound(9))));
        assert!(matches!(repo.delete(9).await, Err(UserError::NotFound(9))));
        assert!(repo.get_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
