use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload of an issued bearer token.
///
/// The subject is the username the token was issued for. `exp` is always
/// present, so every token carries an expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Username
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Claims for `username`, valid for `ttl` from now.
    pub fn for_username(username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: username.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    pub fn username(&self) -> &str {
        &self.sub
    }
}
