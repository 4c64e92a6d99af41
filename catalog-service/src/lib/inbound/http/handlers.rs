use std::collections::BTreeMap;
use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::category::errors::CategoryError;
use crate::product::errors::ProductError;
use crate::user::errors::AuthError;

pub mod create_category;
pub mod create_product;
pub mod current_user;
pub mod delete_category;
pub mod delete_product;
pub mod get_category;
pub mod get_product;
pub mod list_categories;
pub mod list_products;
pub mod login;
pub mod register;
pub mod update_product;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    /// Field name to message, one entry per rejected field.
    Validation(BTreeMap<String, String>),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, messages) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(fields),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
        };

        (
            status,
            Json(ApiErrorBody {
                status_code: status.as_u16(),
                message,
                messages,
            }),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameNotFound(_) => ApiError::NotFound(err.to_string()),
            AuthError::BadCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::DuplicateUsername(_) => ApiError::Conflict(err.to_string()),
            AuthError::InvalidUsername(_)
            | AuthError::InvalidPassword(_)
            | AuthError::InvalidDisplayName(_) => ApiError::BadRequest(err.to_string()),
            AuthError::Hashing(_) | AuthError::Token(_) | AuthError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::ProductNotFound(_) | ProductError::CategoryNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ProductError::InvalidProductId(_)
            | ProductError::InvalidName(_)
            | ProductError::InvalidPrice(_)
            | ProductError::InvalidQuantity(_)
            | ProductError::InvalidDescription(_)
            | ProductError::InvalidPageRequest(_) => ApiError::BadRequest(err.to_string()),
            ProductError::DatabaseError(_) | ProductError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CategoryError::NameAlreadyExists(_) | CategoryError::InUse(_) => {
                ApiError::Conflict(err.to_string())
            }
            CategoryError::InvalidCategoryId(_) | CategoryError::InvalidName(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CategoryError::DatabaseError(_) | CategoryError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// JSON body extractor whose rejections use the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<BTreeMap<String, String>>,
}

/// Collects per-field validation failures while a request body is parsed.
#[derive(Debug, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record the error of `result` under `field`, if any.
    pub fn check<T, E: fmt::Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.insert(field.to_string(), e.to_string());
                None
            }
        }
    }

    /// Record a missing required field.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.0
                .insert(field.to_string(), format!("{field} is required"));
        }
        value
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors.0)
    }
}
