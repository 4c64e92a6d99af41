use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::category::models::CategoryId;
use crate::domain::pagination::PageRequest;
use crate::product::errors::ProductError;
use crate::product::models::Description;
use crate::product::models::Price;
use crate::product::models::Product;
use crate::product::models::ProductFields;
use crate::product::models::ProductId;
use crate::product::models::ProductName;
use crate::product::models::Quantity;
use crate::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: PgRow) -> Result<Product, ProductError> {
        Ok(Product {
            id: ProductId(row.get("id")),
            name: ProductName::new(row.get("name"))?,
            price: Price::new(row.get::<Decimal, _>("price"))?,
            quantity: Quantity::new(row.get("quantity"))?,
            description: Description::new(row.get("description"))?,
            category_id: CategoryId(row.get("category_id")),
        })
    }

    fn map_write_error(e: sqlx::Error, category_id: CategoryId) -> ProductError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return ProductError::CategoryNotFound(category_id);
            }
        }
        ProductError::DatabaseError(e.to_string())
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, fields: ProductFields) -> Result<Product, ProductError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, price, quantity, description, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, quantity, description, category_id
            "#,
        )
        .bind(fields.name.as_str())
        .bind(fields.price.amount())
        .bind(fields.quantity.value())
        .bind(fields.description.as_str())
        .bind(fields.category_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, fields.category_id))?;

        Self::row_to_product(row)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, quantity, description, category_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_product).transpose()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let row = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, quantity = $4, description = $5, category_id = $6
            WHERE id = $1
            RETURNING id, name, price, quantity, description, category_id
            "#,
        )
        .bind(product.id.0)
        .bind(product.name.as_str())
        .bind(product.price.amount())
        .bind(product.quantity.value())
        .bind(product.description.as_str())
        .bind(product.category_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, product.category_id))?;

        row.map(Self::row_to_product)
            .transpose()?
            .ok_or(ProductError::ProductNotFound(product.id))
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::ProductNotFound(*id));
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, quantity, description, category_id
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn list_page(&self, request: &PageRequest) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, quantity, description, category_id
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(to_i64(request.limit()))
        .bind(to_i64(request.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn count(&self) -> Result<u64, ProductError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn count_by_category(&self, category_id: &CategoryId) -> Result<u64, ProductError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
                .bind(category_id.0)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
