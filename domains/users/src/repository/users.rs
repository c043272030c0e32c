//! User store
//!
//! Uses runtime `sqlx::query_as` with binds so the crate builds without a
//! live database.

use chrono::{DateTime, Utc};
use letseat_auth::{AuthError, Role, UserDirectory, UserRecord};
use letseat_common::{Pagination, RepositoryError};
use sqlx::PgPool;

use crate::domain::entities::{NewUser, User};

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    Created(User),
    AlreadyExists,
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn list(&self, page: Pagination) -> Result<Vec<User>, RepositoryError>;

    /// Insert unless a user with the same email exists
    async fn insert(&self, new_user: NewUser) -> Result<InsertOutcome, RepositoryError>;

    /// Returns `None` if there is no such user
    async fn set_role(&self, email: &str, role: Role) -> Result<Option<User>, RepositoryError>;

    /// Returns `false` if there was nothing to delete
    async fn delete(&self, email: &str) -> Result<bool, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    name: Option<String>,
    role: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        // Unrecognised role text grants nothing
        let role = row.role.as_deref().and_then(|text| match text.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(email = %row.email, error = %e, "Ignoring unrecognised role");
                None
            }
        });

        User {
            email: row.email,
            name: row.name,
            role,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT email, name, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(row.map(User::from))
    }

    async fn list(&self, page: Pagination) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT email, name, role, created_at
            FROM users
            ORDER BY created_at ASC, email ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, new_user: NewUser) -> Result<InsertOutcome, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            INSERT INTO users (email, name, role, created_at)
            VALUES ($1, $2, NULL, NOW())
            ON CONFLICT (email) DO NOTHING
            RETURNING email, name, role, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(match row {
            Some(row) => InsertOutcome::Created(row.into()),
            None => InsertOutcome::AlreadyExists,
        })
    }

    async fn set_role(&self, email: &str, role: Role) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users SET role = $2
            WHERE email = $1
            RETURNING email, name, role, created_at
            "#,
        )
        .bind(email)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, email: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl UserDirectory for PgUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        let user = self.find_by_email(email).await.map_err(|e| {
            tracing::error!(error = %e, email = %email, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user.map(UserRecord::from))
    }
}
