//! Host-owned refresh timer
//!
//! A `RefreshTimer` calls a callback on a fixed period from a tokio task. The
//! task lives exactly as long as the timer value: dropping it (including on
//! early return or unwinding) aborts the task, so no tick fires afterwards.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

pub struct RefreshTimer {
    handle: JoinHandle<()>,
    period: Duration,
}

impl RefreshTimer {
    /// Start ticking. The first tick fires immediately.
    ///
    /// Must be called from within a tokio runtime. `period` must be non-zero.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            // A slow terminal should not cause a burst of catch-up redraws
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick();
            }
        });
        debug!(period_ms = period.as_millis() as u64, "refresh timer started");
        RefreshTimer { handle, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop ticking. Equivalent to dropping the timer.
    pub fn stop(self) {}
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("refresh timer stopped");
    }
}
