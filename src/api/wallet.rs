// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Wallet resource gateways: balance, stats, transactions.
//!
//! Each handler requires a session, parses optional query parameters with
//! documented defaults, delegates to the wallet service, and passes the
//! result through unmodified. Parameter values are forwarded as received:
//! `period` is not validated against an allow-list and `limit`/`offset`
//! are not clamped, preserving the wire contract the frontend relies on.

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::extract::Query,
    error::ApiError,
    models::{WalletBalance, WalletStats, WalletTransaction},
    session::Session,
    state::AppState,
};

/// Default page size for the transaction list.
pub const DEFAULT_TRANSACTION_LIMIT: i64 = 50;

/// Default aggregation period for wallet stats.
pub const DEFAULT_STATS_PERIOD: &str = "month";

/// Query parameters for wallet stats.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatsQuery {
    /// Aggregation window: "week", "month" or "year" (default "month")
    pub period: Option<String>,
}

/// Query parameters for the transaction list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TransactionListQuery {
    /// Maximum number of entries (default 50)
    #[param(default = 50)]
    pub limit: Option<i64>,
    /// Number of entries to skip (default 0)
    #[param(default = 0)]
    pub offset: Option<i64>,
}

/// Get the caller's wallet balance summary.
#[utoipa::path(
    get,
    path = "/api/wallet/balance",
    tag = "Wallet",
    security(("session" = [])),
    responses(
        (status = 200, description = "Balance summary", body = WalletBalance),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Wallet service failure")
    )
)]
pub async fn get_balance(
    Session(user): Session,
    State(state): State<AppState>,
) -> Result<Json<WalletBalance>, ApiError> {
    state
        .wallet
        .balance(&user.user_id)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(user_id = %user.user_id, error = %e, "wallet balance error");
            ApiError::internal(e.to_string())
        })
}

/// Get aggregated wallet activity for a period.
#[utoipa::path(
    get,
    path = "/api/wallet/stats",
    tag = "Wallet",
    params(StatsQuery),
    security(("session" = [])),
    responses(
        (status = 200, description = "Aggregated stats", body = WalletStats),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Wallet service failure")
    )
)]
pub async fn get_stats(
    Session(user): Session,
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<WalletStats>, ApiError> {
    let period = query
        .period
        .unwrap_or_else(|| DEFAULT_STATS_PERIOD.to_string());
    state
        .wallet
        .stats(&user.user_id, &period)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(user_id = %user.user_id, %period, error = %e, "wallet stats error");
            ApiError::internal(e.to_string())
        })
}

/// List the caller's wallet transactions, newest first.
#[utoipa::path(
    get,
    path = "/api/wallet/transactions",
    tag = "Wallet",
    params(TransactionListQuery),
    security(("session" = [])),
    responses(
        (status = 200, description = "Transaction list", body = [WalletTransaction]),
        (status = 401, description = "No resolvable session"),
        (status = 500, description = "Wallet service failure")
    )
)]
pub async fn list_transactions(
    Session(user): Session,
    State(state): State<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<WalletTransaction>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_TRANSACTION_LIMIT);
    let offset = query.offset.unwrap_or(0);
    state
        .wallet
        .transactions(&user.user_id, limit, offset)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(user_id = %user.user_id, limit, offset, error = %e, "wallet transactions error");
            ApiError::internal(e.to_string())
        })
}
