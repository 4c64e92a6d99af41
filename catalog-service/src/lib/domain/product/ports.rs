use async_trait::async_trait;

use crate::category::models::CategoryId;
use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductFields;
use crate::product::models::ProductId;
use crate::product::models::ProductView;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product in an existing category.
    ///
    /// # Arguments
    /// * `fields` - Validated product fields
    ///
    /// # Returns
    /// View of the created product with its store-assigned id
    ///
    /// # Errors
    /// * `CategoryNotFound` - Category does not exist (nothing is persisted)
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, fields: ProductFields) -> Result<ProductView, ProductError>;

    /// Overwrite every mutable field of an existing product.
    ///
    /// # Errors
    /// * `ProductNotFound` - Product does not exist
    /// * `CategoryNotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_product(
        &self,
        id: &ProductId,
        fields: ProductFields,
    ) -> Result<ProductView, ProductError>;

    /// Delete a product.
    ///
    /// # Returns
    /// View of the product as it was before removal
    ///
    /// # Errors
    /// * `ProductNotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: &ProductId) -> Result<ProductView, ProductError>;

    /// # Errors
    /// * `ProductNotFound` - Product does not exist
    async fn get_product(&self, id: &ProductId) -> Result<ProductView, ProductError>;

    /// Every product in store order.
    ///
    /// # Returns
    /// `None` when the store holds no products at all, never `Some(vec![])`
    async fn list_products(&self) -> Result<Option<Vec<ProductView>>, ProductError>;

    /// One page of products in store order with collection totals.
    async fn list_products_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<ProductView>, ProductError>;
}

/// Persistence operations for products.
///
/// Store order is ascending product id.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product and assign its id.
    async fn create(&self, fields: ProductFields) -> Result<Product, ProductError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// # Errors
    /// * `ProductNotFound` - Product does not exist
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// # Errors
    /// * `ProductNotFound` - Product does not exist
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;

    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Products in `[offset, offset + limit)` of store order.
    async fn list_page(&self, request: &PageRequest) -> Result<Vec<Product>, ProductError>;

    async fn count(&self) -> Result<u64, ProductError>;

    /// Number of products referencing `category_id`.
    async fn count_by_category(&self, category_id: &CategoryId) -> Result<u64, ProductError>;
}
