// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Stripe checkout gateway.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::extract::Json,
    error::ApiError,
    models::PlanType,
    providers::stripe::{self, CheckoutParams},
    session::Session,
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    /// Plan to purchase: "basic", "premium" or "vip"
    pub plan_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutResponse {
    pub session_id: String,
    pub checkout_url: String,
}

/// Create a Stripe Checkout session for a subscription plan.
///
/// Looks the plan up in the catalog, then creates the session through the
/// process-wide Stripe client (constructed once on first use).
#[utoipa::path(
    post,
    path = "/api/payments/checkout-session",
    tag = "Payments",
    request_body = CreateCheckoutRequest,
    security(("session" = [])),
    responses(
        (status = 200, description = "Checkout session created", body = CreateCheckoutResponse),
        (status = 400, description = "Unknown or non-purchasable plan"),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Stripe or subscription service failure")
    )
)]
pub async fn create_checkout_session(
    Session(user): Session,
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<CreateCheckoutResponse>, ApiError> {
    let plan_type = PlanType::from_str(&request.plan_type)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown plan: {}", request.plan_type)))?;
    if plan_type == PlanType::Free {
        return Err(ApiError::bad_request("The free plan has no checkout"));
    }

    let catalog = state.subscriptions.plans().await.map_err(|e| {
        tracing::error!(error = %e, "checkout plan lookup error");
        ApiError::internal(e.to_string())
    })?;
    let plan = catalog
        .into_iter()
        .find_map(|(candidate, plan)| (candidate == plan_type).then_some(plan))
        .ok_or_else(|| ApiError::bad_request(format!("Unknown plan: {}", request.plan_type)))?;

    let client = stripe::shared_client().await.map_err(|e| {
        tracing::error!(error = %e, "stripe client error");
        ApiError::internal(e.to_string())
    })?;

    let params = CheckoutParams {
        product_name: format!("Hey Papasito {}", plan.name),
        amount_cents: plan.price_monthly_cents,
        currency: plan.currency,
        customer_email: None,
        client_reference_id: user.user_id.clone(),
    };
    let session = client.create_checkout_session(&params).await.map_err(|e| {
        tracing::error!(user_id = %user.user_id, error = %e, "checkout session error");
        ApiError::internal(e.to_string())
    })?;

    Ok(Json(CreateCheckoutResponse {
        session_id: session.id,
        checkout_url: session.url,
    }))
}
