use axum::http::{HeaderMap, header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::domain::post::entity::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerClaims {
    pub sub: String,
    pub exp: usize,
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Resolve the viewer from a bearer token.
///
/// A missing, invalid or expired token, or an empty subject, yields an
/// anonymous viewer rather than an error.
pub fn decode_viewer(headers: &HeaderMap, secret: &str) -> Option<UserId> {
    let token = extract_bearer_token(headers)?;
    let claims = decode::<ViewerClaims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| tracing::debug!(error = %e, "ignoring invalid viewer token"))
    .ok()?
    .claims;

    let viewer = UserId::new(claims.sub);
    (!viewer.is_empty()).then_some(viewer)
}
