//! Bearer credential extraction from request headers.
//!
//! Tokens arrive through one of two transports, checked in order:
//!
//! 1. The standard `Authorization: Bearer <token>` header, with a
//!    case-insensitive scheme.
//! 2. A raw `Bearer: <token>` header, kept for API clients that send the
//!    token without the scheme prefix.
//!
//! A malformed `Authorization` value (wrong scheme, missing token part)
//! falls through to the second transport rather than failing outright.

use http::HeaderMap;

/// Extracts a bearer token from the request headers.
///
/// Returns `None` when neither transport carries a non-empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = from_authorization_header(headers) {
        return Some(token);
    }
    from_raw_bearer_header(headers)
}

fn from_authorization_header(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn from_raw_bearer_header(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("bearer")?.to_str().ok()?;
    let token = value.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
