// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Brevo transactional email integration for booking reminders.

use std::{env, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use super::{env_or_default, required_env_present};
use crate::{
    models::BookingReminder,
    services::{DomainError, ReminderMailer},
};

const DEFAULT_API_BASE_URL: &str = "https://api.brevo.com";
const DEFAULT_SENDER_EMAIL: &str = "no-reply@heypapasito.com";
const DEFAULT_SENDER_NAME: &str = "Hey Papasito";

#[derive(Debug, thiserror::Error)]
pub enum BrevoError {
    #[error("Brevo configuration missing: {0}")]
    MissingConfig(String),

    #[error("Brevo request failed: {0}")]
    Request(String),

    #[error("Brevo rejected the email: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone)]
pub struct BrevoClient {
    api_base_url: String,
    api_key: String,
    sender_email: String,
    sender_name: String,
    http: Client,
}

impl BrevoClient {
    pub fn is_configured() -> bool {
        required_env_present("BREVO_API_KEY")
    }

    pub fn from_env() -> Result<Self, BrevoError> {
        let api_base_url = env_or_default("BREVO_API_BASE_URL", DEFAULT_API_BASE_URL);
        let api_key = env::var("BREVO_API_KEY")
            .map_err(|_| BrevoError::MissingConfig("BREVO_API_KEY".to_string()))?;
        let sender_email = env_or_default("BREVO_SENDER_EMAIL", DEFAULT_SENDER_EMAIL);
        let sender_name = env_or_default("BREVO_SENDER_NAME", DEFAULT_SENDER_NAME);

        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| BrevoError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_base_url,
            api_key,
            sender_email,
            sender_name,
            http,
        })
    }

    /// Deliver one booking reminder via `POST /v3/smtp/email`.
    pub async fn send_reminder(&self, reminder: &BookingReminder) -> Result<(), BrevoError> {
        let greeting = reminder
            .user_name
            .as_deref()
            .map(|name| format!("Hola {name},"))
            .unwrap_or_else(|| "Hola,".to_string());

        let payload = json!({
            "sender": { "name": self.sender_name, "email": self.sender_email },
            "to": [{ "email": reminder.user_email }],
            "subject": "Recordatorio de tu reserva - Hey Papasito",
            "htmlContent": format!(
                "<p>{greeting}</p><p>Te recordamos tu reserva:</p><p><strong>{}</strong></p>",
                reminder.booking_details
            ),
        });

        let response = self
            .http
            .post(format!("{}/v3/smtp/email", self.api_base_url))
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BrevoError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BrevoError::Rejected(format!("{status}: {body}")));
        }

        info!(user_email = %reminder.user_email, "booking reminder email sent");
        Ok(())
    }
}

#[async_trait]
impl ReminderMailer for BrevoClient {
    async fn send_booking_reminder(&self, reminder: &BookingReminder) -> Result<(), DomainError> {
        self.send_reminder(reminder)
            .await
            .map_err(|e| DomainError::Provider(e.to_string()))
    }
}
