// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Hey Papasito - Booking/Marketplace API Service
//!
//! This crate provides the session-authenticated API layer for the Hey
//! Papasito web application: subscription and wallet resource gateways,
//! booking reminder delivery, and Stripe checkout.
//!
//! ## Modules
//!
//! - `api` - HTTP resource gateways (Axum)
//! - `session` - Session token resolution
//! - `services` - Domain service seams (subscription, wallet, mailer)
//! - `providers` - Third-party clients (Brevo, Stripe)
//! - `reactive` - Client-side leaf utilities (condition, breakpoint, loader, reveal)

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod reactive;
pub mod services;
pub mod session;
pub mod state;
