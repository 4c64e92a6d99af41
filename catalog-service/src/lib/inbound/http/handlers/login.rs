use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::FieldErrors;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginResponse;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|response| ApiSuccess::new(StatusCode::OK, response.into()))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, FieldErrors> {
        let mut errors = FieldErrors::default();
        let username = errors.check("username", Username::new(self.username));
        let password = errors.check("password", Password::new(self.password));

        match (username, password) {
            (Some(username), Some(password)) => Ok(LoginCommand { username, password }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
    pub header: String,
}

impl From<LoginResponse> for LoginResponseData {
    fn from(response: LoginResponse) -> Self {
        Self {
            access_token: response.access_token,
            header: response.header,
        }
    }
}
