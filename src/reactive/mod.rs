// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Client-side leaf utilities.
//!
//! Each utility is independent, owns its local state exclusively, and ties
//! its subscription to the handle's lifetime: dropping the handle releases
//! the subscription on every exit path. Nothing here shares mutable state
//! across instances.
//!
//! - [`condition`] - subscribe to a named boolean condition
//! - [`breakpoint`] - derive a mobile/desktop boolean from viewport widths
//! - [`loader`] - guarded three-state async loading
//! - [`reveal`] - one-way visibility latch for lazily rendered sections

pub mod breakpoint;
pub mod condition;
pub mod loader;
pub mod reveal;

pub use breakpoint::{BreakpointWatch, ViewportFeed, DEFAULT_MOBILE_BREAKPOINT};
pub use condition::{ConditionFeed, ConditionWatch};
pub use loader::{LoadState, Loader};
pub use reveal::{RevealGate, RevealOptions};
