//! Bearer-token route protection for axum.
//!
//! [`BearerGuard`] holds the token configuration and verifies incoming
//! requests; [`require_bearer`] is the middleware seam that wires it into a
//! router:
//!
//! ```ignore
//! let guard = BearerGuard::new(TokenConfig::new(secret));
//! let app = Router::new()
//!     .route("/me", get(whoami))
//!     .layer(middleware::from_fn_with_state(guard, require_bearer));
//! ```
//!
//! Handlers behind the guard receive the verified claims through the
//! [`CurrentUser`] extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use error::{ErrorBody, Result, TokenError};
use token::{verify_token, Claims, TokenConfig};

/// Request guard holding the verification configuration.
#[derive(Debug, Clone)]
pub struct BearerGuard {
    config: TokenConfig,
}

impl BearerGuard {
    /// Create a new guard.
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Verify the bearer token carried by the given headers.
    ///
    /// A missing, unreadable, or empty `Authorization` header yields
    /// [`TokenError::Missing`]; everything else is delegated to
    /// [`verify_token`].
    pub fn verify(&self, headers: &HeaderMap) -> Result<Claims> {
        let token = bearer_token(headers).ok_or(TokenError::Missing)?;
        verify_token(token, &self.config)
    }
}

/// Extract the bearer token: the second whitespace-delimited field of the
/// `Authorization` header value, taken verbatim. The scheme word itself is
/// not validated.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
}

/// Middleware for [`axum::middleware::from_fn_with_state`].
///
/// On success the verified [`Claims`] are inserted into the request
/// extensions and the rest of the pipeline runs; on failure the request is
/// answered directly and no claims reach downstream handlers.
pub async fn require_bearer(
    State(guard): State<BearerGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    match guard.verify(req.headers()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!("Rejected request to {}: {}", req.uri().path(), err);
            reject(&err)
        }
    }
}

fn reject(err: &TokenError) -> Response {
    let status = match err {
        TokenError::Missing => StatusCode::UNAUTHORIZED,
        _ => StatusCode::FORBIDDEN,
    };
    (status, Json(ErrorBody::from(err))).into_response()
}

/// Extractor for the claims attached by [`require_bearer`].
///
/// Rejects with 401 when no claims are present, which means the guard is not
/// installed on the route.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| reject(&TokenError::Missing))
    }
}
