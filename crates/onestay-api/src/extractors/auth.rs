//! `AuthUser` extractor — pulls the JWT from the Authorization header, validates, and injects identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use onestay_auth::extract_bearer_token;
use onestay_core::error::AppError;
use onestay_service::RequestIdentity;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestIdentity);

impl AuthUser {
    /// Returns the inner `RequestIdentity`.
    pub fn identity(&self) -> &RequestIdentity {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)
            .ok_or_else(|| AppError::authentication("Missing authentication token"))?;

        // Signature and expiry are both checked here; an invalid token is
        // indistinguishable from a missing one in the response.
        let claims = state.jwt_decoder.decode(&token)?;

        Ok(AuthUser(RequestIdentity::from(&claims)))
    }
}

/// Identity extractor for routes serving both anonymous and authenticated
/// callers.
///
/// A missing or invalid token yields `None` instead of a rejection, so
/// public reads degrade to the anonymous view.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<RequestIdentity>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = extract_bearer_token(&parts.headers)
            .and_then(|token| state.jwt_decoder.decode(&token).ok())
            .map(|claims| RequestIdentity::from(&claims));

        Ok(OptionalAuthUser(identity))
    }
}
