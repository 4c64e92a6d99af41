use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::FieldErrors;
use crate::category::models::Category;
use crate::category::models::CategoryName;
use crate::category::models::CreateCategoryCommand;
use crate::category::ports::CategoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .create_category(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    name: String,
}

impl CreateCategoryRequest {
    fn try_into_command(self) -> Result<CreateCategoryCommand, FieldErrors> {
        let mut errors = FieldErrors::default();

        match errors.check("name", CategoryName::new(self.name)) {
            Some(name) => Ok(CreateCategoryCommand { name }),
            None => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.as_str().to_string(),
        }
    }
}
