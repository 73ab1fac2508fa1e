//! Token signing configuration.

/// Default token validity: one hour.
pub const DEFAULT_EXPIRY_SECS: i64 = 3600;

/// Token configuration.
///
/// The expiration is an explicit field filled at construction rather than a
/// constant consulted at signing time, so every issuer's lifetime is visible
/// where the issuer is built.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret key for signing and verifying tokens
    pub secret: String,
    /// Token validity duration in seconds
    pub expires_in_secs: i64,
}

impl TokenConfig {
    /// Create a new configuration with the default one-hour expiry.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in_secs: DEFAULT_EXPIRY_SECS,
        }
    }

    /// Set the token validity duration.
    pub fn with_expiry(mut self, secs: i64) -> Self {
        self.expires_in_secs = secs;
        self
    }
}
