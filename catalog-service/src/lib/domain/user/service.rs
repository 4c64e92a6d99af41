use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginResponse;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Holds no state of its own: every call re-reads through the repository,
/// and issued tokens are not recorded anywhere.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store
    /// * `token_issuer` - Signs access tokens on successful login
    pub fn new(repository: Arc<UR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginResponse, AuthError> {
        let user = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| AuthError::UsernameNotFound(command.username.to_string()))?;

        let is_valid = self
            .password_hasher
            .verify(command.password.expose(), &user.password_hash)?;

        if !is_valid {
            tracing::warn!(username = %user.username, "Login rejected: bad credentials");
            return Err(AuthError::BadCredentials);
        }

        let access_token = self.token_issuer.issue(user.username.as_str())?;
        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginResponse::bearer(access_token))
    }

    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUsername(command.username.to_string()));
        }

        let password_hash = self.password_hasher.hash(command.password.expose())?;

        let user = self
            .repository
            .create(NewUser {
                display_name: command.display_name,
                username: command.username,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, AuthError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UsernameNotFound(username.to_string()))
    }
}
