use async_trait::async_trait;

use crate::category::errors::CategoryError;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::category::models::CategoryName;
use crate::category::models::CreateCategoryCommand;

/// Port for category management.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a category.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another category has this name
    /// * `DatabaseError` - Database operation failed
    async fn create_category(&self, command: CreateCategoryCommand)
        -> Result<Category, CategoryError>;

    /// # Errors
    /// * `NotFound` - Category does not exist
    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    /// All categories in ascending id order.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Delete a category no product references.
    ///
    /// # Returns
    /// The deleted category
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `InUse` - At least one product references the category
    async fn delete_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category and assign its id.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another category has this name
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, name: CategoryName) -> Result<Category, CategoryError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError>;

    async fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, CategoryError>;

    /// Retrieve multiple categories by identifiers.
    ///
    /// # Returns
    /// Found categories (missing IDs are skipped without error)
    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CategoryError>;

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `InUse` - Rejected by the store because products still reference it
    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError>;
}
