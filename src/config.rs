// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SESSION_SECRET` | HMAC secret for session token verification | Dev-only fallback |
//! | `SESSION_COOKIE` | Name of the session cookie | `papasito_session` |
//! | `BREVO_API_KEY` | Brevo transactional email API key | Unset = log-only mailer |
//! | `BREVO_API_BASE_URL` | Brevo API base URL | `https://api.brevo.com` |
//! | `BREVO_SENDER_EMAIL` | Sender address for outbound mail | `no-reply@heypapasito.com` |
//! | `BREVO_SENDER_NAME` | Sender display name | `Hey Papasito` |
//! | `STRIPE_SECRET_KEY` | Stripe API secret key | Required for checkout |
//! | `STRIPE_API_BASE_URL` | Stripe API base URL | `https://api.stripe.com` |
//! | `CHECKOUT_SUCCESS_URL` | Redirect after completed checkout | `https://heypapasito.com/checkout/success` |
//! | `CHECKOUT_CANCEL_URL` | Redirect after abandoned checkout | `https://heypapasito.com/checkout/cancel` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the session token HMAC secret.
///
/// When unset, [`DEV_SESSION_SECRET`] is used and a warning is logged.
/// The fallback exists so the server starts in local development; it must
/// never be relied on in production.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Development-only session secret used when `SESSION_SECRET` is unset.
pub const DEV_SESSION_SECRET: &str = "papasito-dev-session-secret";

/// Environment variable name overriding the session cookie name.
pub const SESSION_COOKIE_ENV: &str = "SESSION_COOKIE";

/// Environment variable name for the logging format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Default server bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server bind port.
pub const DEFAULT_PORT: u16 = 8080;
