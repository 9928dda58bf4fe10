// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! One-way reveal latch for lazily rendered sections.
//!
//! A section renders a placeholder until its element first comes into
//! view, then renders its real content permanently. The transition is
//! one-way: once revealed, later observations cannot hide it again.

/// Visibility tuning for a [`RevealGate`].
#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    /// Minimum visible ratio (0.0..=1.0) that counts as "in view"
    pub threshold: f64,
    /// Extra distance (layout units) around the viewport that counts as
    /// in view, so content can start revealing just before it scrolls in
    pub margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            margin: 100.0,
        }
    }
}

/// Latches to "revealed" on the first qualifying observation.
#[derive(Debug)]
pub struct RevealGate {
    options: RevealOptions,
    revealed: bool,
}

impl RevealGate {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            revealed: false,
        }
    }

    /// Feed one intersection observation: the element's visible ratio and
    /// its distance from the viewport edge (0 when already inside).
    /// Returns the latched state.
    pub fn observe(&mut self, visible_ratio: f64, edge_distance: f64) -> bool {
        if self.revealed {
            return true;
        }
        if visible_ratio >= self.options.threshold || edge_distance <= self.options.margin {
            self.revealed = true;
        }
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}
