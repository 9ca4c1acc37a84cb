use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{CreateUser, User},
    repository::UserRepository,
};

/// SeaORM-backed repository; works against any backend the connection was
/// opened for.
#[derive(Clone)]
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Classify a write failure: unique violations become `DuplicateEmail`,
/// everything else passes through.
fn write_err(err: DbErr, email: &str) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail(email.to_string()),
        _ => UserError::Storage(err),
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn get_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(UserError::NotFound(id))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let active = entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email.clone()),
            phone: Set(input.phone),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &input.email))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let id = user.id;
        let active = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(user.name),
            email: Set(user.email.clone()),
            phone: Set(user.phone),
            created_at: Unchanged(user.created_at),
            updated_at: NotSet,
        };

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => UserError::NotFound(id),
            e => write_err(e, &user.email),
        })?;

        tracing::info!(user_id = %id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use test_utils::TestDatabase;
    use test_utils::assertions::{assert_not_before, assert_some};

    fn input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());

        let created = repo.create(input("Alice", "alice@x.com")).await.unwrap();
        assert!(created.id > 0);
        assert_not_before(created.updated_at, created.created_at, "fresh row");

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.email, "alice@x.com");
        assert_eq!(fetched.phone, "555-0100");

        let by_email = assert_some(repo.get_by_email("alice@x.com").await.unwrap(), "by email");
        assert_eq!(by_email.id, created.id);
        assert!(repo.get_by_email("bob@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unique_constraint_maps_to_duplicate_email() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());
        repo.create(input("Alice", "alice@x.com")).await.unwrap();

        let err = repo.create(input("Other", "alice@x.com")).await.unwrap_err();
        assert!(matches!(err, UserError::DuplicateEmail(e) if e == "alice@x.com"));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());
        let a = repo.create(input("A", "a@x.com")).await.unwrap();
        let b = repo.create(input("B", "b@x.com")).await.unwrap();

        let ids: Vec<i64> = repo.get_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn update_persists_and_bumps_updated_at() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());
        let created = repo.create(input("Alice", "alice@x.com")).await.unwrap();

        let mut user = created.clone();
        user.phone = String::new();
        let updated = repo.update(user).await.unwrap();

        assert_eq!(updated.phone, "");
        assert_eq!(updated.created_at, created.created_at);
        assert_not_before(updated.updated_at, created.updated_at, "after update");
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());
        let now = Utc::now();
        let ghost = User {
            id: 404,
            name: "Ghost".into(),
            email: "ghost@x.com".into(),
            phone: String::new(),
            created_at: now,
            updated_at: now,
        };

        assert!(matches!(repo.update(ghost).await, Err(UserError::NotFound(404))));
    }

    #[tokio::test]
    async fn update_into_taken_email_is_duplicate() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());
        repo.create(input("A", "a@x.com")).await.unwrap();
        let mut b = repo.create(input("B", "b@x.com")).await.unwrap();

        b.email = "a@x.com".into();
        assert!(matches!(repo.update(b).await, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let db = TestDatabase::new().await;
        let repo = SqlUserRepository::new(db.connection());
        let created = repo.create(input("Alice", "alice@x.com")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(matches!(repo.delete(created.id).await, Err(UserError::NotFound(_))));
        assert!(matches!(repo.get_by_id(created.id).await, Err(UserError::NotFound(_))));
    }
}
