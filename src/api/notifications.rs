// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Booking reminder gateway.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::extract::Json, error::ApiError, models::BookingReminder, state::AppState,
};

/// Request body for a booking reminder.
///
/// All fields are optional at the parsing layer; presence of `userEmail`
/// and `bookingDetails` is checked in the handler so a missing field
/// yields the documented 400 envelope, not a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendReminderRequest {
    pub user_email: Option<String>,
    pub booking_details: Option<String>,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendReminderResponse {
    pub success: bool,
}

/// Send a booking reminder email.
///
/// Requires `userEmail` and `bookingDetails`; an empty string counts as
/// missing. No mail call is attempted when validation fails.
#[utoipa::path(
    post,
    path = "/api/notifications/send-reminder",
    tag = "Notifications",
    request_body = SendReminderRequest,
    responses(
        (status = 200, description = "Reminder accepted", body = SendReminderResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Mail delivery failure")
    )
)]
pub async fn send_booking_reminder(
    State(state): State<AppState>,
    Json(request): Json<SendReminderRequest>,
) -> Result<Json<SendReminderResponse>, ApiError> {
    let user_email = request.user_email.filter(|v| !v.is_empty());
    let booking_details = request.booking_details.filter(|v| !v.is_empty());
    let (user_email, booking_details) = match (user_email, booking_details) {
        (Some(email), Some(details)) => (email, details),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    let reminder = BookingReminder {
        user_email,
        booking_details,
        user_name: request.user_name,
        user_phone: request.user_phone,
    };

    state
        .mailer
        .send_booking_reminder(&reminder)
        .await
        .map_err(|e| {
            tracing::error!(user_email = %reminder.user_email, error = %e, "send reminder error");
            ApiError::internal(e.to_string())
        })?;

    Ok(Json(SendReminderResponse { success: true }))
}
