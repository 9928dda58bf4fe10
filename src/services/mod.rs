// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Domain service seams.
//!
//! The gateways treat these as opaque collaborators: each trait call either
//! produces the resource payload or a [`DomainError`] the gateway converts
//! into a 500 envelope. The in-memory implementations back the default
//! binary so the server runs without external infrastructure; production
//! deployments swap in database-backed implementations behind the same
//! traits.

pub mod mailer;
pub mod subscription;
pub mod wallet;

pub use mailer::{LogMailer, ReminderMailer};
pub use subscription::{InMemorySubscriptions, SubscriptionService};
pub use wallet::{InMemoryWallet, WalletService};

/// Failure from a domain service or one of its providers.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Business-level failure with a caller-visible message
    #[error("{0}")]
    Failed(String),

    /// A third-party provider call failed
    #[error("provider request failed: {0}")]
    Provider(String),
}
