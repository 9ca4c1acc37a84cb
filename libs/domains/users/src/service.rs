use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// The user operations both transports are built on.
///
/// Request-shape validation belongs to the transport; implementations enforce
/// the business rules only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserOperations: Send + Sync + 'static {
    async fn get_all_users(&self) -> UserResult<Vec<User>>;

    async fn get_user(&self, id: i64) -> UserResult<User>;

    async fn create_user(&self, input: CreateUser) -> UserResult<User>;

    async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User>;

    async fn delete_user(&self, id: i64) -> UserResult<()>;
}

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserOperations for UserService<R> {
    async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.get_all().await
    }

    async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository.get_by_id(id).await
    }

    async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        if self.repository.get_by_email(&input.email).await?.is_some() {
            tracing::info!(email = %input.email, "Rejected create: email already in use");
            return Err(UserError::DuplicateEmail(input.email));
        }

        self.repository.create(input).await
    }

    async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        let mut user = self.repository.get_by_id(id).await?;

        if let Some(email) = input.email.as_deref().filter(|e| *e != user.email) {
            if let Some(owner) = self.repository.get_by_email(email).await? {
                if owner.id != id {
                    tracing::info!(user_id = %id, email = %email, "Rejected update: email already in use");
                    return Err(UserError::DuplicateEmail(email.to_string()));
                }
            }
        }

        user.apply_update(input);
        self.repository.update(user).await
    }

    async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};
    use chrono::Utc;
    use mockall::predicate::*;

    fn user(id: i64, email: &str) -> User {
        let now = Utc::now();
        User {
            id,
            name: "Alice".to_string(),
            email: email.to_string(),
            phone: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn create_input(email: &str) -> CreateUser {
        CreateUser {
            name: "Alice".to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn create_user_success() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_email()
            .with(eq("alice@x.com"))
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(user(1, &input.email)));

        let service = UserService::new(mock_repo);
        let created = service.create_user(create_input("alice@x.com")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.email, "alice@x.com");
    }

    #[tokio::test]
    async fn create_user_with_taken_email_never_inserts() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_email()
            .returning(|email| Ok(Some(user(7, email))));
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let err = service.create_user(create_input("alice@x.com")).await.unwrap_err();

        assert!(matches!(err, UserError::DuplicateEmail(e) if e == "alice@x.com"));
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|id| Err(UserError::NotFound(id)));
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let err = service
            .update_user(5, UpdateUser::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound(5)));
    }

    #[tokio::test]
    async fn update_to_another_users_email_is_rejected() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(user(id, "alice@x.com")));
        mock_repo
            .expect_get_by_email()
            .with(eq("bob@x.com"))
            .returning(|email| Ok(Some(user(2, email))));
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let input = UpdateUser {
            email: Some("bob@x.com".to_string()),
            ..Default::default()
        };
        let err = service.update_user(1, input).await.unwrap_err();

        assert!(matches!(err, UserError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn update_with_own_email_skips_the_probe() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(user(id, "alice@x.com")));
        mock_repo.expect_get_by_email().never();
        mock_repo.expect_update().times(1).returning(Ok);

        let service = UserService::new(mock_repo);
        let input = UpdateUser {
            name: Some("Alice B".to_string()),
            email: Some("alice@x.com".to_string()),
            ..Default::default()
        };
        let updated = service.update_user(1, input).await.unwrap();

        assert_eq!(updated.name, "Alice B");
    }

    #[tokio::test]
    async fn empty_update_still_persists() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(user(id, "alice@x.com")));
        mock_repo
            .expect_update()
            .times(1)
            .withf(|u| u.name == "Alice" && u.email == "alice@x.com" && u.phone.is_empty())
            .returning(Ok);

        let service = UserService::new(mock_repo);
        service.update_user(1, UpdateUser::default()).await.unwrap();
    }

    #[tokio::test]
    async fn delete_passes_through_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(3))
            .returning(|id| Err(UserError::NotFound(id)));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.delete_user(3).await,
            Err(UserError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn alice_lifecycle_against_in_memory_store() {
        let service = UserService::new(InMemoryUserRepository::new());

        let alice = service.create_user(create_input("a@x.com")).await.unwrap();
        assert!(alice.id > 0);

        let updated = service
            .update_user(
                alice.id,
                UpdateUser {
                    email: Some("a2@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "a2@x.com");
        assert_eq!(updated.name, "Alice");

        service.delete_user(alice.id).await.unwrap();
        assert!(matches!(
            service.get_user(alice.id).await,
            Err(UserError::NotFound(_))
        ));
        assert!(service.get_all_users().await.unwrap().is_empty());
    }
}
