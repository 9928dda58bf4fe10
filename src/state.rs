// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

use std::{env, sync::Arc};

use crate::{
    config::{DEV_SESSION_SECRET, SESSION_COOKIE_ENV, SESSION_SECRET_ENV},
    providers::brevo::BrevoClient,
    services::{
        InMemorySubscriptions, InMemoryWallet, LogMailer, ReminderMailer, SubscriptionService,
        WalletService,
    },
    session::{SessionVerifier, DEFAULT_SESSION_COOKIE},
};

/// Shared application state: the session verifier plus the domain service
/// collaborators behind each gateway.
#[derive(Clone)]
pub struct AppState {
    pub subscriptions: Arc<dyn SubscriptionService>,
    pub wallet: Arc<dyn WalletService>,
    pub mailer: Arc<dyn ReminderMailer>,
    pub session: Arc<SessionVerifier>,
}

impl AppState {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionService>,
        wallet: Arc<dyn WalletService>,
        mailer: Arc<dyn ReminderMailer>,
        session: SessionVerifier,
    ) -> Self {
        Self {
            subscriptions,
            wallet,
            mailer,
            session: Arc::new(session),
        }
    }

    /// Build state from the environment: in-memory domain services, the
    /// Brevo mailer when configured (log-only fallback otherwise), and the
    /// session verifier keyed by `SESSION_SECRET`.
    pub fn from_env() -> Self {
        let secret = match env::var(SESSION_SECRET_ENV) {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!(
                    "{SESSION_SECRET_ENV} is not set; using the development fallback secret"
                );
                DEV_SESSION_SECRET.to_string()
            }
        };
        let cookie_name = env::var(SESSION_COOKIE_ENV)
            .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string());

        let mailer: Arc<dyn ReminderMailer> = if BrevoClient::is_configured() {
            match BrevoClient::from_env() {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::warn!(error = %e, "Brevo misconfigured, falling back to log mailer");
                    Arc::new(LogMailer)
                }
            }
        } else {
            Arc::new(LogMailer)
        };

        Self::new(
            Arc::new(InMemorySubscriptions::new()),
            Arc::new(InMemoryWallet::with_demo_data()),
            mailer,
            SessionVerifier::new(secret.as_bytes(), cookie_name),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemorySubscriptions::new()),
            Arc::new(InMemoryWallet::with_demo_data()),
            Arc::new(LogMailer),
            SessionVerifier::new(DEV_SESSION_SECRET.as_bytes(), DEFAULT_SESSION_COOKIE),
        )
    }
}
