// ABOUTME: Access-token verification middleware attaching the verified caller to requests
// ABOUTME: Verifies HS256 tokens from x-access-token or Authorization headers; never issues tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use reward_core::models::VerifiedCaller;
use reward_core::response::{ResponseEnvelope, ResponseStatus};
use serde::{Deserialize, Serialize};

use crate::constants::headers;
use crate::errors::{AppError, AppResult};

/// Claims carried by access tokens issued by the login service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Numeric user id
    pub id: i64,
    /// Social login provider
    pub provider: String,
    /// Account email
    pub email: String,
    /// Expiration timestamp
    pub exp: i64,
}

impl From<AccessTokenClaims> for VerifiedCaller {
    fn from(claims: AccessTokenClaims) -> Self {
        Self {
            user_id: claims.id,
            provider: claims.provider,
            email: claims.email,
        }
    }
}

/// Verifies access tokens against the shared HS256 secret
#[derive(Clone)]
pub struct AccessTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl AccessTokenVerifier {
    /// Create a verifier for tokens signed with `secret`
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify `token` and return the caller it identifies
    ///
    /// # Errors
    ///
    /// Returns `AuthExpired` for expired tokens and `AuthInvalid` for anything
    /// else that fails verification
    pub fn verify(&self, token: &str) -> AppResult<VerifiedCaller> {
        decode::<AccessTokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims.into())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::auth_expired(),
                _ => AppError::auth_invalid(format!("Access token rejected: {e}")),
            })
    }
}

/// Pull the raw token from `x-access-token`, falling back to `Authorization: Bearer`
#[must_use]
pub fn extract_access_token(headers: &HeaderMap) -> Option<&str> {
    let from_access_header = headers
        .get(headers::ACCESS_TOKEN)
        .and_then(|h| h.to_str().ok());
    let from_bearer = || {
        headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
    };

    from_access_header
        .or_else(from_bearer)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware: verify the caller or answer with a token envelope
///
/// Handlers behind this layer read the caller with
/// `Extension<VerifiedCaller>`.
#[tracing::instrument(
    skip_all,
    fields(user_id = tracing::field::Empty, success = tracing::field::Empty)
)]
pub async fn require_verified_caller(
    State(verifier): State<Arc<AccessTokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_access_token(request.headers()) else {
        tracing::Span::current().record("success", false);
        tracing::warn!("Rejected request without access token");
        return ResponseEnvelope::failure(ResponseStatus::TokenEmpty).into_response();
    };

    match verifier.verify(token) {
        Ok(caller) => {
            tracing::Span::current()
                .record("user_id", caller.user_id)
                .record("success", true);
            request.extensions_mut().insert(caller);
            next.run(request).await
        }
        Err(e) => {
            tracing::Span::current().record("success", false);
            tracing::warn!("Access token verification failed: {}", e);
            ResponseEnvelope::failure(ResponseStatus::TokenVerificationFailure).into_response()
        }
    }
}
