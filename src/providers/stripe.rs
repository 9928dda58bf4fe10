// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Stripe Checkout integration for subscription payments.
//!
//! The process shares a single [`StripeClient`] built lazily on first use.
//! `tokio::sync::OnceCell` serializes concurrent first callers so the
//! client is constructed exactly once; there is no refresh or invalidation
//! path.

use std::{env, time::Duration};

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::env_or_default;

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_SUCCESS_URL: &str = "https://heypapasito.com/checkout/success";
const DEFAULT_CANCEL_URL: &str = "https://heypapasito.com/checkout/cancel";

static SHARED_CLIENT: OnceCell<StripeClient> = OnceCell::const_new();

/// The process-wide Stripe client, constructed from the environment on
/// first use and reused for the lifetime of the process.
pub async fn shared_client() -> Result<&'static StripeClient, StripeError> {
    SHARED_CLIENT
        .get_or_try_init(|| async { StripeClient::from_env() })
        .await
}

#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("Stripe configuration missing: {0}")]
    MissingConfig(String),

    #[error("Stripe request failed: {0}")]
    Request(String),

    #[error("Stripe rejected the request: {0}")]
    Rejected(String),

    #[error("Stripe response was invalid: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    api_base_url: String,
    secret_key: String,
    success_url: String,
    cancel_url: String,
    http: Client,
}

/// Parameters for one Checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutParams {
    pub product_name: String,
    pub amount_cents: i64,
    pub currency: String,
    pub customer_email: Option<String>,
    /// Correlates the session with the buyer in webhooks
    pub client_reference_id: String,
}

/// The subset of the Checkout session object the frontend needs.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

impl StripeClient {
    pub fn from_env() -> Result<Self, StripeError> {
        let api_base_url = env_or_default("STRIPE_API_BASE_URL", DEFAULT_API_BASE_URL);
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| StripeError::MissingConfig("STRIPE_SECRET_KEY".to_string()))?;
        let success_url = env_or_default("CHECKOUT_SUCCESS_URL", DEFAULT_SUCCESS_URL);
        let cancel_url = env_or_default("CHECKOUT_CANCEL_URL", DEFAULT_CANCEL_URL);

        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| StripeError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_base_url,
            secret_key,
            success_url,
            cancel_url,
            http,
        })
    }

    /// Create a Checkout session via `POST /v1/checkout/sessions`
    /// (form-encoded, as the Stripe v1 API requires).
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutParams,
    ) -> Result<CheckoutSession, StripeError> {
        let amount = params.amount_cents.to_string();
        let currency = params.currency.to_ascii_lowercase();
        let mut form: Vec<(&str, &str)> = vec![
            ("mode", "subscription"),
            ("success_url", &self.success_url),
            ("cancel_url", &self.cancel_url),
            ("client_reference_id", &params.client_reference_id),
            ("line_items[0][quantity]", "1"),
            ("line_items[0][price_data][currency]", &currency),
            ("line_items[0][price_data][unit_amount]", &amount),
            (
                "line_items[0][price_data][product_data][name]",
                &params.product_name,
            ),
            ("line_items[0][price_data][recurring][interval]", "month"),
        ];
        if let Some(email) = params.customer_email.as_deref() {
            form.push(("customer_email", email));
        }

        let response = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.api_base_url))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| StripeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StripeError::Rejected(format!("{status}: {body}")));
        }

        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| StripeError::InvalidResponse(e.to_string()))
    }
}
