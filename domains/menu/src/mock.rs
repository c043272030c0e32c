//! In-memory menu store for tests

use std::sync::{Arc, RwLock};

use chrono::Utc;
use letseat_common::{Pagination, RepositoryError};
use uuid::Uuid;

use crate::domain::entities::{Favorite, MenuItem, NewFavorite, NewMenuItem};
use crate::repository::MenuStore;

#[derive(Debug, Default)]
struct Tables {
    items: Vec<MenuItem>,
    favorites: Vec<Favorite>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list_items(
        &self,
        category: Option<&str>,
        page: Pagination,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let tables = self.tables.read().expect("menu store lock poisoned");
        Ok(tables
            .items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError> {
        let tables = self.tables.read().expect("menu store lock poisoned");
        Ok(tables.items.iter().find(|item| item.id == id).cloned())
    }

    async fn insert_item(&self, item: NewMenuItem) -> Result<MenuItem, RepositoryError> {
        let created = MenuItem {
            id: Uuid::new_v4(),
            name: item.name,
            recipe: item.recipe,
            image: item.image,
            category: item.category,
            price: item.price,
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .expect("menu store lock poisoned")
            .items
            .push(created.clone());
        Ok(created)
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.write().expect("menu store lock poisoned");
        let before = tables.items.len();
        tables.items.retain(|item| item.id != id);
        let deleted = tables.items.len() < before;
        if deleted {
            tables.favorites.retain(|f| f.menu_item_id != id);
        }
        Ok(deleted)
    }

    async fn list_favorites(&self, email: &str) -> Result<Vec<Favorite>, RepositoryError> {
        let tables = self.tables.read().expect("menu store lock poisoned");
        Ok(tables
            .favorites
            .iter()
            .filter(|f| f.email == email)
            .cloned()
            .collect())
    }

    async fn add_favorite(
        &self,
        email: &str,
        favorite: NewFavorite,
    ) -> Result<Favorite, RepositoryError> {
        let mut tables = self.tables.write().expect("menu store lock poisoned");
        if !tables.items.iter().any(|item| item.id == favorite.menu_item_id) {
            return Err(RepositoryError::NotFound);
        }

        let created = Favorite {
            id: Uuid::new_v4(),
            menu_item_id: favorite.menu_item_id,
            email: email.to_string(),
            name: favorite.name,
            image: favorite.image,
            price: favorite.price,
            created_at: Utc::now(),
        };
        tables.favorites.push(created.clone());
        Ok(created)
    }

    async fn delete_favorite(&self, id: Uuid, email: &str) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.write().expect("menu store lock poisoned");
        let before = tables.favorites.len();
        tables.favorites.retain(|f| !(f.id == id && f.email == email));
        Ok(tables.favorites.len() < before)
    }
}
