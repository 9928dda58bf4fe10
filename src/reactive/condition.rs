// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Named boolean condition subscriptions.
//!
//! A [`ConditionFeed`] publishes evaluations of one named condition (for
//! example a display condition evaluated by the embedding shell). Watchers
//! observe the current match state and wake on every change. A watcher with
//! no feed behind it reports "not matching" and never wakes.

use tokio::sync::watch;

/// Publisher side of one named condition.
pub struct ConditionFeed {
    name: String,
    tx: watch::Sender<bool>,
}

impl ConditionFeed {
    pub fn new(name: impl Into<String>, initial: bool) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            name: name.into(),
            tx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Publish a new evaluation. Watchers wake only when the value changed.
    pub fn publish(&self, matches: bool) {
        self.tx.send_if_modified(|current| {
            if *current == matches {
                false
            } else {
                *current = matches;
                true
            }
        });
    }

    /// Acquire a subscription. Dropping the returned watch releases it.
    pub fn subscribe(&self) -> ConditionWatch {
        ConditionWatch {
            rx: Some(self.tx.subscribe()),
        }
    }
}

/// Subscriber side: the current match state plus change notifications.
pub struct ConditionWatch {
    rx: Option<watch::Receiver<bool>>,
}

impl ConditionWatch {
    /// The default when no display context exists: never matches, never
    /// changes.
    pub fn detached() -> Self {
        Self { rx: None }
    }

    pub fn matches(&self) -> bool {
        self.rx.as_ref().map(|rx| *rx.borrow()).unwrap_or(false)
    }

    /// Wait for the next evaluation change and return the new value.
    /// Returns `None` when detached or when the feed has gone away.
    pub async fn changed(&mut self) -> Option<bool> {
        let rx = self.rx.as_mut()?;
        rx.changed().await.ok()?;
        Some(*rx.borrow_and_update())
    }
}
