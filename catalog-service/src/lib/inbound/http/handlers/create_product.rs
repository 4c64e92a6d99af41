use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::create_category::CategoryData;
use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::FieldErrors;
use crate::category::models::CategoryId;
use crate::inbound::http::router::AppState;
use crate::product::models::Description;
use crate::product::models::Price;
use crate::product::models::ProductFields;
use crate::product::models::ProductName;
use crate::product::models::ProductView;
use crate::product::models::Quantity;
use crate::product::ports::ProductServicePort;

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .create_product(body.try_into_fields()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// HTTP request body shared by product create and update (raw JSON).
///
/// Absent price and quantity default to zero, an absent description to empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default, alias = "name")]
    product_name: String,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    quantity: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "category_id")]
    category_id: Option<i64>,
}

impl ProductRequest {
    pub(super) fn try_into_fields(self) -> Result<ProductFields, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.check("productName", ProductName::new(self.product_name));
        let price = errors.check("price", self.price.map_or(Ok(Price::default()), Price::new));
        let quantity = errors.check(
            "quantity",
            self.quantity.map_or(Ok(Quantity::default()), Quantity::new),
        );
        let description = errors.check(
            "description",
            self.description
                .map_or(Ok(Description::default()), Description::new),
        );
        let category_id = errors.require("categoryId", self.category_id.map(CategoryId));

        match (name, price, quantity, description, category_id) {
            (Some(name), Some(price), Some(quantity), Some(description), Some(category_id)) => {
                Ok(ProductFields {
                    name,
                    price,
                    quantity,
                    description,
                    category_id,
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: i64,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub description: String,
    pub category: CategoryData,
}

impl From<&ProductView> for ProductData {
    fn from(product: &ProductView) -> Self {
        Self {
            id: product.id.0,
            product_name: product.name.as_str().to_string(),
            price: product.price.amount(),
            quantity: product.quantity.value(),
            description: product.description.as_str().to_string(),
            category: (&product.category).into(),
        }
    }
}
