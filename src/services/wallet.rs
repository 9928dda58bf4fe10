// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Wallet domain service.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DomainError;
use crate::models::{TransactionKind, WalletBalance, WalletStats, WalletTransaction};

#[async_trait]
pub trait WalletService: Send + Sync {
    async fn balance(&self, user_id: &str) -> Result<WalletBalance, DomainError>;

    /// Aggregate activity for the given period. The gateway forwards the
    /// period string uninterpreted; range policy lives here.
    async fn stats(&self, user_id: &str, period: &str) -> Result<WalletStats, DomainError>;

    /// Ledger entries, newest first.
    async fn transactions(
        &self,
        user_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WalletTransaction>, DomainError>;
}

/// In-memory wallet ledger keyed by user id.
pub struct InMemoryWallet {
    ledgers: RwLock<HashMap<String, Vec<WalletTransaction>>>,
}

impl InMemoryWallet {
    pub fn new() -> Self {
        Self {
            ledgers: RwLock::new(HashMap::new()),
        }
    }

    /// A wallet pre-populated with a small demo ledger so local runs have
    /// something to show.
    pub fn with_demo_data() -> Self {
        let now = Utc::now();
        let demo = vec![
            entry(TransactionKind::Deposit, 5000, "Top-up", now - Duration::days(40)),
            entry(
                TransactionKind::BookingPayment,
                -2500,
                "Booking #1042",
                now - Duration::days(12),
            ),
            entry(
                TransactionKind::Bonus,
                500,
                "Referral bonus",
                now - Duration::days(5),
            ),
            entry(
                TransactionKind::BookingPayout,
                3000,
                "Payout booking #1031",
                now - Duration::days(2),
            ),
        ];
        let mut ledgers = HashMap::new();
        ledgers.insert("demo_user".to_string(), demo);
        Self {
            ledgers: RwLock::new(ledgers),
        }
    }

    pub async fn record(&self, user_id: &str, transaction: WalletTransaction) {
        self.ledgers
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(transaction);
    }
}

impl Default for InMemoryWallet {
    fn default() -> Self {
        Self::new()
    }
}

fn entry(
    kind: TransactionKind,
    amount_cents: i64,
    description: &str,
    created_at: DateTime<Utc>,
) -> WalletTransaction {
    WalletTransaction {
        id: Uuid::new_v4().to_string(),
        kind,
        amount_cents,
        currency: "EUR".to_string(),
        description: description.to_string(),
        created_at,
    }
}

/// Start of the aggregation window for a period name. Unknown periods fall
/// back to the whole ledger history, matching the permissive gateway
/// contract.
fn period_start(period: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match period {
        "week" => Some(now - Duration::weeks(1)),
        "month" => Some(now - Duration::days(30)),
        "year" => Some(now - Duration::days(365)),
        _ => None,
    }
}

#[async_trait]
impl WalletService for InMemoryWallet {
    async fn balance(&self, user_id: &str) -> Result<WalletBalance, DomainError> {
        let ledgers = self.ledgers.read().await;
        let ledger = ledgers.get(user_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(WalletBalance {
            available_cents: ledger.iter().map(|t| t.amount_cents).sum(),
            pending_cents: 0,
            currency: "EUR".to_string(),
            updated_at: Utc::now(),
        })
    }

    async fn stats(&self, user_id: &str, period: &str) -> Result<WalletStats, DomainError> {
        let start = period_start(period, Utc::now());
        let ledgers = self.ledgers.read().await;
        let ledger = ledgers.get(user_id).map(Vec::as_slice).unwrap_or(&[]);

        let mut earned_cents = 0;
        let mut spent_cents = 0;
        let mut transaction_count = 0;
        for transaction in ledger {
            if let Some(start) = start {
                if transaction.created_at < start {
                    continue;
                }
            }
            transaction_count += 1;
            if transaction.amount_cents >= 0 {
                earned_cents += transaction.amount_cents;
            } else {
                spent_cents += -transaction.amount_cents;
            }
        }

        Ok(WalletStats {
            period: period.to_string(),
            earned_cents,
            spent_cents,
            transaction_count,
        })
    }

    async fn transactions(
        &self,
        user_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WalletTransaction>, DomainError> {
        let ledgers = self.ledgers.read().await;
        let mut ledger = ledgers.get(user_id).cloned().unwrap_or_default();
        ledger.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        // Negative values arrive unclamped from the gateway; treat them as
        // empty ranges here.
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(ledger.into_iter().skip(offset).take(limit).collect())
    }
}
