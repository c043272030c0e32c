//! Menu and favorites store

use letseat_common::{Pagination, RepositoryError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Favorite, MenuItem, NewFavorite, NewMenuItem};

#[async_trait::async_trait]
pub trait MenuStore: Send + Sync {
    async fn list_items(
        &self,
        category: Option<&str>,
        page: Pagination,
    ) -> Result<Vec<MenuItem>, RepositoryError>;

    async fn get_item(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError>;

    async fn insert_item(&self, item: NewMenuItem) -> Result<MenuItem, RepositoryError>;

    /// Returns `false` if there was nothing to delete
    async fn delete_item(&self, id: Uuid) -> Result<bool, RepositoryError>;

    async fn list_favorites(&self, email: &str) -> Result<Vec<Favorite>, RepositoryError>;

    async fn add_favorite(
        &self,
        email: &str,
        favorite: NewFavorite,
    ) -> Result<Favorite, RepositoryError>;

    /// Deletes only if the favorite belongs to `email`
    async fn delete_favorite(&self, id: Uuid, email: &str) -> Result<bool, RepositoryError>;
}

#[derive(Clone)]
pub struct PgMenuStore {
    pool: PgPool,
}

impl PgMenuStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MenuStore for PgMenuStore {
    async fn list_items(
        &self,
        category: Option<&str>,
        page: Pagination,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let items: Vec<MenuItem> = sqlx::query_as(
            r#"
            SELECT id, name, recipe, image, category, price, created_at
            FROM menu_items
            WHERE ($1::TEXT IS NULL OR category = $1)
            ORDER BY created_at ASC, id ASC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(category)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(items)
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError> {
        let item: Option<MenuItem> = sqlx::query_as(
            r#"
            SELECT id, name, recipe, image, category, price, created_at
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(item)
    }

    async fn insert_item(&self, item: NewMenuItem) -> Result<MenuItem, RepositoryError> {
        let created: MenuItem = sqlx::query_as(
            r#"
            INSERT INTO menu_items (id, name, recipe, image, category, price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, name, recipe, image, category, price, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&item.name)
        .bind(&item.recipe)
        .bind(&item.image)
        .bind(&item.category)
        .bind(item.price)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(created)
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_favorites(&self, email: &str) -> Result<Vec<Favorite>, RepositoryError> {
        let favorites: Vec<Favorite> = sqlx::query_as(
            r#"
            SELECT id, menu_item_id, email, name, image, price, created_at
            FROM favorites
            WHERE email = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(favorites)
    }

    async fn add_favorite(
        &self,
        email: &str,
        favorite: NewFavorite,
    ) -> Result<Favorite, RepositoryError> {
        let created: Favorite = sqlx::query_as(
            r#"
            INSERT INTO favorites (id, menu_item_id, email, name, image, price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, menu_item_id, email, name, image, price, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(favorite.menu_item_id)
        .bind(email)
        .bind(&favorite.name)
        .bind(&favorite.image)
        .bind(favorite.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::NotFound
            }
            _ => RepositoryError::from_sqlx(e),
        })?;

        Ok(created)
    }

    async fn delete_favorite(&self, id: Uuid, email: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND email = $2")
            .bind(id)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
