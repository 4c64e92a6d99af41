//! Credential utilities shared by the catalog services.
//!
//! - Password hashing (Argon2id)
//! - Bearer token issuing and validation (HS256 JWT bound to a username)
//!
//! Services wrap these in their own domain errors; nothing here knows about
//! users or stores.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("s3cret").unwrap();
//! assert!(hasher.verify("s3cret", &hash).unwrap());
//! assert!(!hasher.verify("other1", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 24).unwrap();
//! let token = issuer.issue("alice").unwrap();
//! let claims = issuer.validate(&token).unwrap();
//! assert_eq!(claims.username(), "alice");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
