//! Process-local stores used when no database is configured.
//!
//! Every store is an id-keyed arena: records live in a `BTreeMap` so that
//! natural order is ascending id, and ids come from a counter that never
//! reuses a value.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::category::errors::CategoryError;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::category::models::CategoryName;
use crate::category::ports::CategoryRepository;
use crate::domain::pagination::PageRequest;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductFields;
use crate::product::models::ProductId;
use crate::product::ports::ProductRepository;
use crate::user::errors::AuthError;

struct Arena<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Arena<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.records.entry(id).or_insert(build(id))
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    arena: RwLock<Arena<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let mut arena = self.arena.write().await;

        if arena
            .records
            .values()
            .any(|existing| existing.username == user.username)
        {
            return Err(AuthError::DuplicateUsername(
                user.username.as_str().to_string(),
            ));
        }

        Ok(arena.insert_with(|id| user.with_id(UserId(id))).clone())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let arena = self.arena.read().await;

        Ok(arena
            .records
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    arena: RwLock<Arena<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, name: CategoryName) -> Result<Category, CategoryError> {
        let mut arena = self.arena.write().await;

        if arena.records.values().any(|category| category.name == name) {
            return Err(CategoryError::NameAlreadyExists(name.to_string()));
        }

        Ok(arena
            .insert_with(|id| Category {
                id: CategoryId(id),
                name,
            })
            .clone())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError> {
        Ok(self.arena.read().await.records.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, CategoryError> {
        let arena = self.arena.read().await;

        Ok(arena
            .records
            .values()
            .find(|category| &category.name == name)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CategoryError> {
        let arena = self.arena.read().await;

        Ok(ids
            .iter()
            .filter_map(|id| arena.records.get(&id.0).cloned())
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.arena.read().await.records.values().cloned().collect())
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError> {
        self.arena
            .write()
            .await
            .records
            .remove(&id.0)
            .map(|_| ())
            .ok_or(CategoryError::NotFound(*id))
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    arena: RwLock<Arena<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, fields: ProductFields) -> Result<Product, ProductError> {
        let mut arena = self.arena.write().await;

        Ok(arena
            .insert_with(|id| fields.with_id(ProductId(id)))
            .clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        Ok(self.arena.read().await.records.get(&id.0).cloned())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut arena = self.arena.write().await;

        match arena.records.get_mut(&product.id.0) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product)
            }
            None => Err(ProductError::ProductNotFound(product.id)),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        self.arena
            .write()
            .await
            .records
            .remove(&id.0)
            .map(|_| ())
            .ok_or(ProductError::ProductNotFound(*id))
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.arena.read().await.records.values().cloned().collect())
    }

    async fn list_page(&self, request: &PageRequest) -> Result<Vec<Product>, ProductError> {
        let arena = self.arena.read().await;

        Ok(arena
            .records
            .values()
            .skip(to_usize(request.offset()))
            .take(to_usize(request.limit()))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, ProductError> {
        Ok(self.arena.read().await.records.len() as u64)
    }

    async fn count_by_category(&self, category_id: &CategoryId) -> Result<u64, ProductError> {
        let arena = self.arena.read().await;

        Ok(arena
            .records
            .values()
            .filter(|product| &product.category_id == category_id)
            .count() as u64)
    }
}
