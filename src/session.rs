// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Session resolution.
//!
//! The frontend carries an opaque session token in the `papasito_session`
//! cookie (or, for non-browser callers, an `Authorization: Bearer` header).
//! The token is an HS256 JWT signed with `SESSION_SECRET`. Resolution either
//! yields a [`SessionUser`] with a non-empty user id or nothing at all; a
//! token that decodes but names no user is treated as no session.
//!
//! Use the [`Session`] extractor in handlers that require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Session(user): Session) -> impl IntoResponse {
//!     // user.user_id is present and non-empty
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
    },
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Clock skew tolerance for token expiry (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Default session cookie name.
pub const DEFAULT_SESSION_COOKIE: &str = "papasito_session";

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id). May be empty in malformed tokens; an empty
    /// subject never resolves to a session.
    #[serde(default)]
    pub sub: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Opaque session id, if the issuer attached one
    #[serde(default)]
    pub sid: Option<String>,
}

/// Resolved caller identity for one request. Never persisted by this layer.
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// Non-empty user id
    pub user_id: String,
    pub session_id: Option<String>,
}

/// Verifies session tokens against the configured secret.
#[derive(Clone)]
pub struct SessionVerifier {
    cookie_name: String,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    pub fn new(secret: &[u8], cookie_name: impl Into<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.validate_aud = false;
        Self {
            cookie_name: cookie_name.into(),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resolve a raw token into a session, or `None` when the token is
    /// invalid, expired, or names no user.
    ///
    /// The subject check is explicit: a structurally valid token with an
    /// empty `sub` decodes fine but must not count as a session.
    pub fn resolve(&self, token: &str) -> Option<SessionUser> {
        let data = decode::<SessionClaims>(token, &self.decoding, &self.validation).ok()?;
        let user_id = data.claims.sub.trim();
        if user_id.is_empty() {
            return None;
        }
        Some(SessionUser {
            user_id: user_id.to_string(),
            session_id: data.claims.sid,
        })
    }
}

/// Extractor requiring a resolvable session.
///
/// Rejection is the exact `401 {"error":"Unauthorized"}` envelope, emitted
/// before any domain service is invoked.
pub struct Session(pub SessionUser);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let verifier = &state.session;
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts, verifier.cookie_name()))
            .ok_or_else(ApiError::unauthorized)?;

        let user = verifier
            .resolve(&token)
            .ok_or_else(ApiError::unauthorized)?;

        Ok(Session(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(str::to_string)
}

fn cookie_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name).then(|| value.to_string())
    })
}

#[cfg(test)]
pub(crate) fn issue_token(secret: &str, sub: &str) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let claims = SessionClaims {
        sub: sub.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        sid: Some("sess_test".to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
