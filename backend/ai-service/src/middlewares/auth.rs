use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;

use crate::error::ServiceError;
use crate::services::AppState;

/// Routes reachable without a credential.
const PUBLIC_PATHS: &[&str] = &["/health"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No credential provided")]
    MissingCredential,
    #[error("Invalid authorization header format")]
    InvalidFormat,
    #[error("Invalid authentication scheme")]
    InvalidScheme,
    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Checks a raw `Authorization` header value against the shared secret.
///
/// The header must be exactly `<scheme> <token>` where the scheme is
/// `Bearer` in any case and the token equals `secret` byte for byte.
pub fn verify_credential(header: Option<&str>, secret: &str) -> Result<(), AuthError> {
    let header = header.ok_or(AuthError::MissingCredential)?;

    let mut parts = header.split_whitespace();
    let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return Err(AuthError::InvalidFormat),
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }

    if token.as_bytes() != secret.as_bytes() {
        return Err(AuthError::InvalidApiKey);
    }

    Ok(())
}

/// Rejects every non-public request that does not carry the configured bearer secret.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    let verdict = match request.headers().get(header::AUTHORIZATION) {
        None => verify_credential(None, &state.config.api_key),
        Some(value) => match value.to_str() {
            Ok(value) => verify_credential(Some(value), &state.config.api_key),
            // Opaque bytes can never split into a valid scheme and token
            Err(_) => Err(AuthError::InvalidFormat),
        },
    };

    if let Err(e) = verdict {
        tracing::warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        );
        return ServiceError::from(e).into_response();
    }

    next.run(request).await
}
