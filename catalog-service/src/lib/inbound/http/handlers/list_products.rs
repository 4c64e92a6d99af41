use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use serde::Serialize;

use super::create_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;
use crate::product::models::ProductView;
use crate::product::ports::ProductServicePort;

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListProductsQuery {
    page: Option<u32>,
    size: Option<u32>,
    #[serde(default)]
    unpaged: bool,
}

/// `GET /products`: a page by default, every product with `unpaged=true`.
///
/// The unpaged listing answers 204 when the store holds no products.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Response, ApiError> {
    if query.unpaged {
        let products = state
            .product_service
            .list_products()
            .await
            .map_err(ApiError::from)?;

        return Ok(match products {
            Some(products) => ApiSuccess::new(
                StatusCode::OK,
                products.iter().map(ProductData::from).collect::<Vec<_>>(),
            )
            .into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        });
    }

    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )
    .map_err(ProductError::from)?;

    state
        .product_service
        .list_products_page(request)
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, PageData::from(page)).into_response())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub content: Vec<ProductData>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl From<Page<ProductView>> for PageData {
    fn from(page: Page<ProductView>) -> Self {
        Self {
            first: page.is_first(),
            last: page.is_last(),
            content: page.content.iter().map(ProductData::from).collect(),
            page_number: page.page_index,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
