//! Time-based debouncing for search input
//!
//! Values sent in a burst collapse into the last one; a value is released once
//! no newer value has arrived for the configured interval.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::trace;

/// Receiving side of a debounced channel
#[derive(Debug)]
pub struct Debouncer<T> {
    rx: mpsc::Receiver<T>,
    interval: Duration,
    pending: Option<T>,
}

/// Debouncer for table search queries
pub type SearchDebouncer = Debouncer<String>;

impl<T> Debouncer<T> {
    /// Create a sender and its debouncer
    pub fn channel(interval: Duration, capacity: usize) -> (mpsc::Sender<T>, Self) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            tx,
            Self {
                rx,
                interval,
                pending: None,
            },
        )
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the next settled value
    ///
    /// Returns the newest value once the input has been quiet for the interval.
    /// When every sender is gone the pending value is flushed immediately, and
    /// after that `None` is returned. Cancel-safe: a value received before the
    /// future is dropped is kept for the next call.
    pub async fn next_settled(&mut self) -> Option<T> {
        if self.pending.is_none() {
            self.pending = Some(self.rx.recv().await?);
        }

        loop {
            match tokio::time::timeout(self.interval, self.rx.recv()).await {
                Ok(Some(newer)) => {
                    trace!("Debounce restarted by newer value");
                    self.pending = Some(newer);
                }
                Ok(None) | Err(_) => return self.pending.take(),
            }
        }
    }

    /// Release the newest value without waiting out the interval
    ///
    /// Drains anything already queued, so a value sent before the call is
    /// never left behind to settle later.
    pub fn take_pending(&mut self) -> Option<T> {
        while let Ok(newer) = self.rx.try_recv() {
            self.pending = Some(newer);
        }
        self.pending.take()
    }
}
