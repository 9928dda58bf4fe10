// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Envelope-preserving request extractors.
//!
//! Axum's stock `Query` and `Json` answer malformed input with plain-text
//! rejection bodies. Every error this service emits must be the uniform
//! `{"error": ...}` envelope, so the gateways use these wrappers instead:
//! same parsing, rejections shaped into [`ApiError`] with axum's status
//! kept (400 for bad query strings and JSON syntax, 415/422 where axum
//! distinguishes them).

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiError;

/// `axum::extract::Query` with enveloped rejections.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);

/// `axum::Json` with enveloped rejections. Also usable as a response body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}
