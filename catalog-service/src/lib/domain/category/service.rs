use std::sync::Arc;

use async_trait::async_trait;

use crate::category::errors::CategoryError;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::category::models::CreateCategoryCommand;
use crate::category::ports::CategoryRepository;
use crate::category::ports::CategoryServicePort;
use crate::product::ports::ProductRepository;

/// Domain service implementation for category management.
///
/// Needs the product store only to refuse deleting a category in use.
pub struct CategoryService<CR, PR>
where
    CR: CategoryRepository,
    PR: ProductRepository,
{
    repository: Arc<CR>,
    product_repository: Arc<PR>,
}

impl<CR, PR> CategoryService<CR, PR>
where
    CR: CategoryRepository,
    PR: ProductRepository,
{
    pub fn new(repository: Arc<CR>, product_repository: Arc<PR>) -> Self {
        Self {
            repository,
            product_repository,
        }
    }
}

#[async_trait]
impl<CR, PR> CategoryServicePort for CategoryService<CR, PR>
where
    CR: CategoryRepository,
    PR: ProductRepository,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        if self
            .repository
            .find_by_name(&command.name)
            .await?
            .is_some()
        {
            return Err(CategoryError::NameAlreadyExists(command.name.to_string()));
        }

        let category = self.repository.create(command.name).await?;
        tracing::info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(category)
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(*id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        let category = self.get_category(id).await?;

        if self.product_repository.count_by_category(id).await? > 0 {
            return Err(CategoryError::InUse(*id));
        }

        self.repository.delete(id).await?;
        tracing::info!(category_id = %id, "Category deleted");

        Ok(category)
    }
}
