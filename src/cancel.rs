//! Caller-driven cancellation
//!
//! A [`CancellationToken`] travels with every call. Firing it, or letting its
//! deadline pass, abandons the in-flight request and fails the call with
//! [`Error::Cancelled`] or [`Error::DeadlineExceeded`]. Clones share the same
//! signal, so one token can be handed to a task that decides to stop a
//! running pagination.

use crate::error::{Error, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Shared cancellation signal with an optional deadline
#[derive(Debug, Clone)]
pub struct CancellationToken {
    signal: Arc<watch::Sender<bool>>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a token that only fires when [`cancel`](Self::cancel) is called
    pub fn new() -> Self {
        let (signal, _) = watch::channel(false);
        Self {
            signal: Arc::new(signal),
            deadline: None,
        }
    }

    /// Create a token that also fires once `timeout` has elapsed
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Create a token that also fires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::new()
        }
    }

    /// Fire the signal for this token and all of its clones
    pub fn cancel(&self) {
        self.signal.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called
    pub fn is_cancelled(&self) -> bool {
        *self.signal.borrow()
    }

    /// The deadline, if one was set
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail fast if the token has already fired
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Error::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Resolve once the token fires, yielding the matching error
    pub async fn fired(&self) -> Error {
        let mut rx = self.signal.subscribe();
        let cancelled = async move {
            // The sender lives as long as `self`, so this only returns once set.
            let _ = rx.wait_for(|cancelled| *cancelled).await;
        };

        match self.deadline {
            Some(deadline) => tokio::select! {
                () = cancelled => Error::Cancelled,
                () = tokio::time::sleep_until(deadline) => Error::DeadlineExceeded,
            },
            None => {
                cancelled.await;
                Error::Cancelled
            }
        }
    }

    /// Drive `fut` to completion unless the token fires first
    ///
    /// When the token wins, `fut` is dropped, which abandons any network
    /// operation it owns.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            biased;
            err = self.fired() => Err(err),
            out = fut => Ok(out),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
