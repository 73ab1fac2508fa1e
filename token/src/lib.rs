//! JWT issuing, verification, and decoding utilities.
//!
//! This crate wraps HMAC-SHA256 token signing behind a small claims map and
//! an explicit [`TokenConfig`]. Route protection lives in the companion
//! `guard` crate.

mod claims;
mod codec;
mod config;

pub use claims::Claims;
pub use codec::{build_token, build_token_with_expiry, decode_token, verify_token};
pub use config::{TokenConfig, DEFAULT_EXPIRY_SECS};
