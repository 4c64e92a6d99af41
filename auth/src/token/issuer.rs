use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;

/// Issues and validates HS256 bearer tokens bound to a username.
///
/// Stateless: nothing about an issued token is stored, validity is decided
/// by signature and `exp` alone.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`, tokens valid for `ttl_hours`.
    ///
    /// The secret should be at least 32 bytes for HS256.
    ///
    /// # Errors
    /// * `InvalidLifetime` - `ttl_hours` is not positive or overflows a timestamp
    pub fn new(secret: &[u8], ttl_hours: i64) -> Result<Self, TokenError> {
        let ttl = Duration::try_hours(ttl_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or(TokenError::InvalidLifetime(ttl_hours))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        })
    }

    /// Issue a fresh token for `username`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.encode(&TokenClaims::for_username(username, self.ttl))
    }

    /// Sign arbitrary claims.
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry, returning the claims.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `Invalid` - Bad signature, malformed token or missing claims
    pub fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}
