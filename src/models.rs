// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Wire and domain types shared by the gateways and domain services.
//!
//! Field names serialize as camelCase because the payloads are consumed by
//! the existing JavaScript frontend unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subscription tier identifier. Serialized lowercase (`"free"`, `"basic"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Free,
    Basic,
    Premium,
    Vip,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "free",
            PlanType::Basic => "basic",
            PlanType::Premium => "premium",
            PlanType::Vip => "vip",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "free" => Some(PlanType::Free),
            "basic" => Some(PlanType::Basic),
            "premium" => Some(PlanType::Premium),
            "vip" => Some(PlanType::Vip),
            _ => None,
        }
    }
}

/// One subscription plan as shown on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Display name
    pub name: String,
    /// Monthly price in minor units (cents)
    pub price_monthly_cents: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Monthly contact allowance; `None` means unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_limit: Option<u32>,
    /// Profile boost credits included per month
    pub boost_credits: u32,
    /// Marketing feature bullets
    pub features: Vec<String>,
}

/// Subscription lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
}

/// A user's current subscription.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub plan_type: PlanType,
    pub status: SubscriptionStatus,
    /// End of the current billing period
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
}

/// Wallet balance summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    /// Spendable balance in minor units
    pub available_cents: i64,
    /// Funds held for in-flight bookings
    pub pending_cents: i64,
    /// ISO 4217 currency code
    pub currency: String,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated wallet activity for one period.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    /// The period the aggregation covers, echoed back verbatim
    pub period: String,
    pub earned_cents: i64,
    pub spent_cents: i64,
    pub transaction_count: u64,
}

/// Direction/category of a wallet ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    BookingPayment,
    BookingPayout,
    Refund,
    Bonus,
}

/// One wallet ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Signed amount in minor units: credits positive, debits negative
    pub amount_cents: i64,
    pub currency: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A booking reminder to deliver by email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingReminder {
    pub user_email: String,
    pub booking_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
}
