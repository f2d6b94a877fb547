//! Periodic refresh of the real-time series.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::source::DashboardSource;
use crate::types::RealtimePoint;

/// How often the platform view refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// One refresh: the clock reading and the series generated for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshFrame {
    /// Number of refreshes before this one.
    pub generation: u64,
    /// Clock reading shown in the header.
    pub now: DateTime<Utc>,
    /// Series ending at `now`.
    pub series: Vec<RealtimePoint>,
}

impl RefreshFrame {
    fn build(source: &dyn DashboardSource, generation: u64) -> Self {
        let now = Utc::now();
        Self {
            generation,
            now,
            series: source.realtime(now),
        }
    }
}

/// Background task that rebuilds a [`RefreshFrame`] every interval.
///
/// Frames are published on a `watch` channel. Dropping the ticker stops the
/// task; subscribers then see the channel close.
#[derive(Debug)]
pub struct RefreshTicker {
    frames: watch::Receiver<RefreshFrame>,
    task: JoinHandle<()>,
}

impl RefreshTicker {
    /// Start ticking every [`REFRESH_INTERVAL`].
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(source: Arc<dyn DashboardSource>) -> Self {
        Self::with_interval(source, REFRESH_INTERVAL)
    }

    /// Start ticking with a custom period.
    #[must_use]
    pub fn with_interval(source: Arc<dyn DashboardSource>, period: Duration) -> Self {
        let (tx, frames) = watch::channel(RefreshFrame::build(source.as_ref(), 0));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; the initial frame covers it.
            interval.tick().await;

            let mut generation = 0;
            loop {
                interval.tick().await;
                generation += 1;

                let frame = RefreshFrame::build(source.as_ref(), generation);
                tracing::trace!(generation, "Realtime series refreshed");
                if tx.send(frame).is_err() {
                    break;
                }
            }
        });

        Self { frames, task }
    }

    /// Most recent frame.
    #[must_use]
    pub fn latest(&self) -> RefreshFrame {
        self.frames.borrow().clone()
    }

    /// Receiver notified on every refresh.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RefreshFrame> {
        self.frames.clone()
    }

    /// Whether the background task is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
