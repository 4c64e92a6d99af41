use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::category::errors::CategoryError;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::category::models::CategoryName;
use crate::category::ports::CategoryRepository;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: PgRow) -> Result<Category, CategoryError> {
        Ok(Category {
            id: CategoryId(row.get("id")),
            name: CategoryName::new(row.get("name"))?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, name: CategoryName) -> Result<Category, CategoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("categories_name_key")
                {
                    return CategoryError::NameAlreadyExists(name.to_string());
                }
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        Ok(Category {
            id: CategoryId(row.get("id")),
            name,
        })
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_category).transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_category).transpose()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CategoryError> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM categories
            WHERE id = ANY($1)
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_category).collect()
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_category).collect()
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return CategoryError::InUse(*id);
                }
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(*id));
        }

        Ok(())
    }
}
