// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Simulated Google sign-in endpoint.
//!
//! Real OAuth lives in the frontend's auth provider; this endpoint returns
//! the static payload the sign-in page expects while the integration is
//! stubbed out.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct GoogleSigninUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GoogleSigninResponse {
    pub success: bool,
    pub provider: String,
    pub user: GoogleSigninUser,
    pub message: String,
}

/// Simulated Google sign-in.
#[utoipa::path(
    get,
    path = "/api/auth/signin/google",
    tag = "Auth",
    responses(
        (status = 200, description = "Simulated sign-in payload", body = GoogleSigninResponse)
    )
)]
pub async fn google_signin() -> Json<GoogleSigninResponse> {
    Json(GoogleSigninResponse {
        success: true,
        provider: "google".to_string(),
        user: GoogleSigninUser {
            id: "google-demo-user".to_string(),
            email: "demo@heypapasito.com".to_string(),
            name: "Demo User".to_string(),
        },
        message: "Simulated Google sign-in".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn payload_is_static_success() {
        let Json(response) = google_signin().await;
        assert!(response.success);
        assert_eq!(response.provider, "google");
        assert_eq!(response.user.id, "google-demo-user");
    }
}
