// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Hey Papasito

//! Guarded asynchronous loading.
//!
//! A [`Loader`] drives a zero-argument async producer through the
//! three-state lifecycle `{data, is_loading, error}`. [`Loader::refresh`]
//! re-runs the producer after resetting to loading (call it when an input
//! the producer depends on changed). Teardown is cooperative: dropping the
//! loader cancels its guard token, and a producer result arriving after
//! that is discarded rather than applied. A refresh likewise cancels the
//! previous in-flight run so a stale result cannot overwrite a newer one.

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Snapshot of a load in progress or settled.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> LoadState<T> {
    fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

type ProducerFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>> + Send>>;
type Producer<T> = Arc<dyn Fn() -> ProducerFuture<T> + Send + Sync>;

pub struct Loader<T> {
    producer: Producer<T>,
    delay: Option<Duration>,
    tx: watch::Sender<LoadState<T>>,
    lifetime: CancellationToken,
    run_guard: CancellationToken,
}

impl<T: Clone + Send + Sync + 'static> Loader<T> {
    /// Start loading immediately, optionally waiting `delay` first.
    pub fn spawn<F, Fut, E>(producer: F, delay: Option<Duration>) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: std::fmt::Display,
    {
        let producer: Producer<T> = Arc::new(move || {
            let fut = producer();
            Box::pin(async move { fut.await.map_err(|e| e.to_string()) })
        });
        let (tx, _) = watch::channel(LoadState::loading());
        let lifetime = CancellationToken::new();
        let run_guard = lifetime.child_token();
        let mut loader = Self {
            producer,
            delay,
            tx,
            lifetime,
            run_guard,
        };
        loader.start_run();
        loader
    }

    fn start_run(&mut self) {
        // Supersede any in-flight run before starting the next one.
        self.run_guard.cancel();
        self.run_guard = self.lifetime.child_token();

        let guard = self.run_guard.clone();
        let tx = self.tx.clone();
        let producer = self.producer.clone();
        let delay = self.delay;

        tx.send_replace(LoadState::loading());
        tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::select! {
                    _ = guard.cancelled() => return,
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            let result = tokio::select! {
                _ = guard.cancelled() => return,
                result = (producer)() => result,
            };
            // Torn down or superseded while the producer ran: discard.
            if guard.is_cancelled() {
                return;
            }
            tx.send_replace(match result {
                Ok(data) => LoadState {
                    data: Some(data),
                    is_loading: false,
                    error: None,
                },
                Err(error) => LoadState {
                    data: None,
                    is_loading: false,
                    error: Some(error),
                },
            });
        });
    }

    /// Reset to loading and re-run the producer.
    pub fn refresh(&mut self) {
        self.start_run();
    }

    /// The current snapshot.
    pub fn state(&self) -> LoadState<T> {
        self.tx.borrow().clone()
    }

    /// Observe state changes independently of the loader handle.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.tx.subscribe()
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
