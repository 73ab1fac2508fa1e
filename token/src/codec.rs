//! JWT building, verification, and decoding.

use error::{Result, TokenError};
use hmac::{Hmac, Mac};
use jwt::{Header, SignWithKey, Token, VerifyWithKey};
use sha2::Sha256;

use crate::claims::Claims;
use crate::config::TokenConfig;

type HmacSha256 = Hmac<Sha256>;

/// Build a signed token from a payload, using the configured expiry.
///
/// The payload is copied and stamped with `iat` (now) and `exp` before
/// signing; caller-supplied values under those names are overwritten. The
/// payload shape is not validated.
pub fn build_token(payload: &Claims, config: &TokenConfig) -> Result<String> {
    build_token_with_expiry(payload, config, config.expires_in_secs)
}

/// Build a signed token with a per-call expiry overriding the configured one.
pub fn build_token_with_expiry(
    payload: &Claims,
    config: &TokenConfig,
    expires_in_secs: i64,
) -> Result<String> {
    let key = HmacSha256::new_from_slice(config.secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        TokenError::CreationFailed
    })?;

    let now = chrono::Utc::now().timestamp();
    let mut claims = payload.clone();
    claims.insert("iat", now);
    claims.insert("exp", now + expires_in_secs);

    claims.sign_with_key(&key).map_err(|e| {
        tracing::error!("Failed to encode JWT: {}", e);
        TokenError::CreationFailed
    })
}

/// Verify a token's signature and expiry, returning the decoded claims.
///
/// Failure causes stay distinct: a token that does not parse is
/// [`TokenError::Malformed`], a parseable token signed under a different
/// secret is [`TokenError::SignatureMismatch`], and a validly signed token
/// past its `exp` is [`TokenError::Expired`].
pub fn verify_token(token: &str, config: &TokenConfig) -> Result<Claims> {
    let key = HmacSha256::new_from_slice(config.secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        TokenError::SignatureMismatch
    })?;

    let claims: Claims = token.verify_with_key(&key).map_err(|e| {
        tracing::warn!("Rejected JWT: {}", e);
        match e {
            jwt::Error::InvalidSignature => TokenError::SignatureMismatch,
            _ => TokenError::Malformed,
        }
    })?;

    if claims.is_expired() {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

/// Decode a token's claims without any signature or expiry check.
///
/// This never proves authenticity and must not be used for authorization
/// decisions; use [`verify_token`] for that.
pub fn decode_token(token: &str) -> Result<Claims> {
    let parsed: Token<Header, Claims, _> = Token::parse_unverified(token).map_err(|e| {
        tracing::warn!("Failed to parse JWT: {}", e);
        TokenError::Malformed
    })?;

    Ok(parsed.claims().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> Claims {
        Claims::new().with("sub", "user123").with("role", "admin")
    }

    #[test]
    fn test_build_and_verify_round_trip() {
        let config = TokenConfig::new("test-secret-key");

        let token = build_token(&payload(), &config).expect("Failed to build");
        let decoded = verify_token(&token, &config).expect("Failed to verify");

        assert_eq!(decoded.subject(), Some("user123"));
        assert_eq!(decoded.get("role"), Some(&serde_json::Value::from("admin")));
        assert!(decoded.issued_at().is_some());
        assert!(decoded.expires_at().is_some());
    }

    #[test]
    fn test_stamped_expiry_matches_config() {
        let config = TokenConfig::new("test-secret-key").with_expiry(120);

        let token = build_token(&payload(), &config).unwrap();
        let decoded = verify_token(&token, &config).unwrap();

        let iat = decoded.issued_at().unwrap();
        let exp = decoded.expires_at().unwrap();
        assert_eq!(exp - iat, 120);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let config = TokenConfig::new("test-secret-key");
        let other = TokenConfig::new("another-secret-key");

        let token = build_token(&payload(), &config).unwrap();

        assert_eq!(
            verify_token(&token, &other),
            Err(TokenError::SignatureMismatch)
        );
    }

    #[test]
    fn test_verify_expired_token() {
        let config = TokenConfig::new("test-secret-key");

        let token = build_token_with_expiry(&payload(), &config, -10).unwrap();

        assert_eq!(verify_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_garbage() {
        let config = TokenConfig::new("test-secret-key");

        assert_eq!(
            verify_token("invalidToken123", &config),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_decode_skips_signature_check() {
        let config = TokenConfig::new("test-secret-key");

        // No secret is involved in decoding; a token signed under any key
        // yields its embedded claims.
        let token = build_token(&payload(), &config).unwrap();
        let decoded = decode_token(&token).expect("Failed to decode");

        assert_eq!(decoded.subject(), Some("user123"));
        assert_eq!(decoded.get("role"), Some(&serde_json::Value::from("admin")));
    }

    #[test]
    fn test_decode_garbage() {
        assert_eq!(decode_token("invalidToken123"), Err(TokenError::Malformed));
    }
}
