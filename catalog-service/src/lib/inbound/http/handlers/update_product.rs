use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_product::ProductData;
use super::create_product::ProductRequest;
use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductId;
use crate::product::ports::ProductServicePort;

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    ApiJson(body): ApiJson<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id =
        ProductId::from_string(&product_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .product_service
        .update_product(&product_id, body.try_into_fields()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
