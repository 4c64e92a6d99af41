use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductId;
use crate::product::ports::ProductServicePort;

/// Deletes a product and echoes it back as it was before removal.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id =
        ProductId::from_string(&product_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .product_service
        .delete_product(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
