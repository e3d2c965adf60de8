//! Authentication service for the admin bearer token.

use hmac::{Hmac, Mac};
use rand::distr::Alphanumeric;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Length of tokens produced by [`AuthService::generate_token`].
pub const GENERATED_TOKEN_LEN: usize = 48;

/// Service for authenticating admin requests via Bearer tokens.
///
/// Only the SHA-256 digest of the configured token is kept. Presented tokens
/// are compared through HMAC-SHA256 under a per-process random key, so the
/// comparison runs in constant time regardless of where the inputs differ.
pub struct AuthService {
    key: [u8; 32],
    token_digest: [u8; 32],
}

impl AuthService {
    /// Creates a new authentication service for `admin_token`.
    pub fn new(admin_token: &str) -> Self {
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);

        Self {
            key,
            token_digest: Sha256::digest(admin_token.as_bytes()).into(),
        }
    }

    fn mac(&self, digest: &[u8]) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(digest);
        mac
    }

    /// Verifies a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let expected = self.mac(&self.token_digest).finalize().into_bytes();
        let presented = Sha256::digest(token.as_bytes());

        self.mac(&presented)
            .verify_slice(&expected)
            .map_err(|_| AppError::unauthorized("Unauthorized", json!({"reason": "Invalid token"})))
    }

    /// Generates a random alphanumeric token suitable for `ADMIN_TOKEN`.
    pub fn generate_token() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}
