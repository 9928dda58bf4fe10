// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Subscription domain service.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DomainError;
use crate::models::{Plan, PlanType, Subscription, SubscriptionStatus};

#[async_trait]
pub trait SubscriptionService: Send + Sync {
    /// The caller's current subscription.
    async fn current(&self, user_id: &str) -> Result<Subscription, DomainError>;

    /// The plan catalog as an ordered mapping of plan-by-type. Iteration
    /// order is the catalog's display order; the plans gateway preserves it.
    async fn plans(&self) -> Result<Vec<(PlanType, Plan)>, DomainError>;
}

/// In-memory subscription service seeded with the standard plan catalog.
///
/// Users without an explicit subscription are on the free tier; `current`
/// synthesizes an active free subscription for them rather than failing.
pub struct InMemorySubscriptions {
    catalog: Vec<(PlanType, Plan)>,
    subscriptions: RwLock<HashMap<String, Subscription>>,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self {
            catalog: default_catalog(),
            subscriptions: RwLock::new(HashMap::new()),
        }
    }

    /// Record a subscription for a user (used by checkout completion and
    /// tests).
    pub async fn subscribe(&self, user_id: &str, plan_type: PlanType) -> Subscription {
        let subscription = Subscription {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            plan_type,
            status: SubscriptionStatus::Active,
            current_period_end: Utc::now() + Duration::days(30),
            cancel_at_period_end: false,
        };
        self.subscriptions
            .write()
            .await
            .insert(user_id.to_string(), subscription.clone());
        subscription
    }
}

impl Default for InMemorySubscriptions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionService for InMemorySubscriptions {
    async fn current(&self, user_id: &str) -> Result<Subscription, DomainError> {
        if let Some(subscription) = self.subscriptions.read().await.get(user_id) {
            return Ok(subscription.clone());
        }
        Ok(Subscription {
            id: format!("sub_free_{user_id}"),
            user_id: user_id.to_string(),
            plan_type: PlanType::Free,
            status: SubscriptionStatus::Active,
            current_period_end: Utc::now() + Duration::days(30),
            cancel_at_period_end: false,
        })
    }

    async fn plans(&self) -> Result<Vec<(PlanType, Plan)>, DomainError> {
        Ok(self.catalog.clone())
    }
}

fn default_catalog() -> Vec<(PlanType, Plan)> {
    vec![
        (
            PlanType::Free,
            Plan {
                name: "Free".to_string(),
                price_monthly_cents: 0,
                currency: "EUR".to_string(),
                contact_limit: Some(3),
                boost_credits: 0,
                features: vec![
                    "Browse profiles".to_string(),
                    "3 contacts per month".to_string(),
                ],
            },
        ),
        (
            PlanType::Basic,
            Plan {
                name: "Basic".to_string(),
                price_monthly_cents: 999,
                currency: "EUR".to_string(),
                contact_limit: Some(25),
                boost_credits: 1,
                features: vec![
                    "25 contacts per month".to_string(),
                    "1 profile boost".to_string(),
                    "Read receipts".to_string(),
                ],
            },
        ),
        (
            PlanType::Premium,
            Plan {
                name: "Premium".to_string(),
                price_monthly_cents: 2499,
                currency: "EUR".to_string(),
                contact_limit: None,
                boost_credits: 5,
                features: vec![
                    "Unlimited contacts".to_string(),
                    "5 profile boosts".to_string(),
                    "Priority support".to_string(),
                ],
            },
        ),
        (
            PlanType::Vip,
            Plan {
                name: "VIP".to_string(),
                price_monthly_cents: 4999,
                currency: "EUR".to_string(),
                contact_limit: None,
                boost_credits: 20,
                features: vec![
                    "Unlimited contacts".to_string(),
                    "20 profile boosts".to_string(),
                    "Featured placement".to_string(),
                    "Dedicated support".to_string(),
                ],
            },
        ),
    ]
}
