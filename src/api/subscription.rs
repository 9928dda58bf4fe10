// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Subscription resource gateways.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    models::{Plan, PlanType, Subscription},
    session::Session,
    state::AppState,
};

/// One catalog entry in the plans listing: the plan type flattened beside
/// the plan fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanListing {
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    #[serde(flatten)]
    pub plan: Plan,
}

/// Get the caller's current subscription.
#[utoipa::path(
    get,
    path = "/api/subscription/current",
    tag = "Subscription",
    security(("session" = [])),
    responses(
        (status = 200, description = "Current subscription", body = Subscription),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Subscription service failure")
    )
)]
pub async fn get_current_subscription(
    Session(user): Session,
    State(state): State<AppState>,
) -> Result<Json<Subscription>, ApiError> {
    state
        .subscriptions
        .current(&user.user_id)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(user_id = %user.user_id, error = %e, "subscription current error");
            ApiError::internal(e.to_string())
        })
}

/// List the plan catalog.
///
/// The service's plan-by-type mapping is flattened into an ordered sequence
/// of `{type, ...plan}` objects, preserving the mapping's iteration order.
/// No session is required; the pricing page is public.
#[utoipa::path(
    get,
    path = "/api/subscription/plans",
    tag = "Subscription",
    responses(
        (status = 200, description = "Ordered plan catalog", body = [PlanListing]),
        (status = 500, description = "Subscription service failure")
    )
)]
pub async fn list_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanListing>>, ApiError> {
    let catalog = state.subscriptions.plans().await.map_err(|e| {
        tracing::error!(error = %e, "subscription plans error");
        ApiError::internal(e.to_string())
    })?;

    let listings = catalog
        .into_iter()
        .map(|(plan_type, plan)| PlanListing { plan_type, plan })
        .collect();
    Ok(Json(listings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_listing_flattens_plan_fields_beside_type() {
        let listing = PlanListing {
            plan_type: PlanType::Basic,
            plan: Plan {
                name: "Basic".to_string(),
                price_monthly_cents: 999,
                currency: "EUR".to_string(),
                contact_limit: Some(25),
                boost_credits: 1,
                features: vec![],
            },
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["type"], "basic");
        assert_eq!(json["name"], "Basic");
        assert_eq!(json["priceMonthlyCents"], 999);
        assert!(json.get("plan").is_none());
    }
}
