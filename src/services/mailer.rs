// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Booking reminder delivery seam.

use async_trait::async_trait;

use super::DomainError;
use crate::models::BookingReminder;

#[async_trait]
pub trait ReminderMailer: Send + Sync {
    async fn send_booking_reminder(&self, reminder: &BookingReminder) -> Result<(), DomainError>;
}

/// Fallback mailer used when Brevo is not configured: writes the reminder
/// to the log instead of delivering it.
pub struct LogMailer;

#[async_trait]
impl ReminderMailer for LogMailer {
    async fn send_booking_reminder(&self, reminder: &BookingReminder) -> Result<(), DomainError> {
        tracing::info!(
            user_email = %reminder.user_email,
            booking_details = %reminder.booking_details,
            "booking reminder (log-only mailer, no email sent)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        let reminder = BookingReminder {
            user_email: "ana@example.com".to_string(),
            booking_details: "Friday 18:00".to_string(),
            user_name: None,
            user_phone: None,
        };
        assert!(LogMailer.send_booking_reminder(&reminder).await.is_ok());
    }
}
