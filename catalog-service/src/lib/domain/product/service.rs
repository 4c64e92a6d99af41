use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::category::ports::CategoryRepository;
use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductFields;
use crate::product::models::ProductId;
use crate::product::models::ProductView;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
pub struct ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    repository: Arc<PR>,
    category_repository: Arc<CR>,
}

impl<PR, CR> ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    /// Create a new product service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Product store
    /// * `category_repository` - Category store used to resolve references
    pub fn new(repository: Arc<PR>, category_repository: Arc<CR>) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    async fn find_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::ProductNotFound(*id))
    }

    async fn resolve_category(&self, id: &CategoryId) -> Result<Category, ProductError> {
        self.category_repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::CategoryNotFound(*id))
    }

    /// Map products to views with one category lookup for the whole batch.
    async fn build_views(&self, products: Vec<Product>) -> Result<Vec<ProductView>, ProductError> {
        let mut category_ids: Vec<CategoryId> = products.iter().map(|p| p.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories: HashMap<CategoryId, Category> = self
            .category_repository
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        products
            .into_iter()
            .map(|product| {
                let category = categories
                    .get(&product.category_id)
                    .cloned()
                    .ok_or(ProductError::CategoryNotFound(product.category_id))?;
                Ok(ProductView::new(product, category))
            })
            .collect()
    }
}

#[async_trait]
impl<PR, CR> ProductServicePort for ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    async fn create_product(&self, fields: ProductFields) -> Result<ProductView, ProductError> {
        let category = self.resolve_category(&fields.category_id).await?;

        let product = self.repository.create(fields).await?;
        tracing::info!(product_id = %product.id, category_id = %category.id, "Product created");

        Ok(ProductView::new(product, category))
    }

    async fn update_product(
        &self,
        id: &ProductId,
        fields: ProductFields,
    ) -> Result<ProductView, ProductError> {
        let mut product = self.find_product(id).await?;
        let category = self.resolve_category(&fields.category_id).await?;

        product.apply(fields);
        let updated = self.repository.update(product).await?;
        tracing::info!(product_id = %updated.id, "Product updated");

        Ok(ProductView::new(updated, category))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<ProductView, ProductError> {
        let product = self.find_product(id).await?;
        let category = self.resolve_category(&product.category_id).await?;

        self.repository.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(ProductView::new(product, category))
    }

    async fn get_product(&self, id: &ProductId) -> Result<ProductView, ProductError> {
        let product = self.find_product(id).await?;
        let category = self.resolve_category(&product.category_id).await?;

        Ok(ProductView::new(product, category))
    }

    async fn list_products(&self) -> Result<Option<Vec<ProductView>>, ProductError> {
        let products = self.repository.list_all().await?;
        if products.is_empty() {
            return Ok(None);
        }

        self.build_views(products).await.map(Some)
    }

    async fn list_products_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<ProductView>, ProductError> {
        let total_elements = self.repository.count().await?;
        let products = self.repository.list_page(&request).await?;
        let content = self.build_views(products).await?;

        Ok(Page::new(content, request, total_elements))
    }
}
