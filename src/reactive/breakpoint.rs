// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Viewport breakpoint derivation.
//!
//! A [`ViewportFeed`] publishes viewport widths on every resize; a
//! [`BreakpointWatch`] derives a mobile/desktop boolean by comparing the
//! current width against its threshold. The boolean is recomputed on every
//! published width, not cached across changes.

use tokio::sync::watch;

/// Width threshold below which a viewport counts as mobile.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 640;

/// Publisher side: the current viewport width.
pub struct ViewportFeed {
    tx: watch::Sender<u32>,
}

impl ViewportFeed {
    pub fn new(initial_width: u32) -> Self {
        let (tx, _) = watch::channel(initial_width);
        Self { tx }
    }

    /// Publish a resize.
    pub fn resize(&self, width: u32) {
        self.tx.send_replace(width);
    }

    /// Watch the mobile boolean against the default threshold.
    pub fn watch_mobile(&self) -> BreakpointWatch {
        self.watch_mobile_at(DEFAULT_MOBILE_BREAKPOINT)
    }

    /// Watch the mobile boolean against a custom threshold.
    pub fn watch_mobile_at(&self, threshold: u32) -> BreakpointWatch {
        BreakpointWatch {
            rx: self.tx.subscribe(),
            threshold,
        }
    }
}

/// Subscriber side: derives `is_mobile` from the latest width.
pub struct BreakpointWatch {
    rx: watch::Receiver<u32>,
    threshold: u32,
}

impl BreakpointWatch {
    pub fn is_mobile(&self) -> bool {
        *self.rx.borrow() < self.threshold
    }

    /// Wait for the next resize and return the recomputed boolean.
    /// Returns `None` once the feed has gone away.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        let width = *self.rx.borrow_and_update();
        Some(width < self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_threshold_is_640() {
        let feed = ViewportFeed::new(639);
        let watch = feed.watch_mobile();
        assert!(watch.is_mobile());

        feed.resize(640);
        assert!(!watch.is_mobile());
    }

    #[tokio::test]
    async fn custom_threshold_is_honored() {
        let feed = ViewportFeed::new(700);
        let watch = feed.watch_mobile_at(768);
        assert!(watch.is_mobile());
    }

    #[tokio::test]
    async fn every_resize_recomputes() {
        let feed = ViewportFeed::new(1024);
        let mut watch = feed.watch_mobile();
        assert!(!watch.is_mobile());

        feed.resize(480);
        assert_eq!(watch.changed().await, Some(true));

        feed.resize(800);
        assert_eq!(watch.changed().await, Some(false));
    }

    #[tokio::test]
    async fn dropped_feed_ends_the_watch() {
        let feed = ViewportFeed::new(1024);
        let mut watch = feed.watch_mobile();
        drop(feed);
        assert_eq!(watch.changed().await, None);
    }
}
