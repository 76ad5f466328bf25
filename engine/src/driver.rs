//! The resolution driver: a cancellable periodic task that re-resolves
//! the live view on a fresh wall-clock sample and publishes it.
//!
//! Publication goes through a [`watch`] channel, so a consumer always
//! observes a complete view; replacement is atomic. The schedule's date
//! is re-checked on every tick: a snapshot that is not for the current
//! calendar day publishes [`LiveView::NotApplicable`] and skips all
//! resolution work, which also covers the clock rolling past midnight
//! while a view stays open.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::domain::DaySchedule;
use crate::core::view::LiveView;
use crate::services::resolution::resolve_at;
use crate::time::Clock;

/// Driver settings. The default one-second cadence matches the display's
/// countdown granularity; tests shrink it.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub tick: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
        }
    }
}

/// Spawns and owns the periodic resolution task.
pub struct LiveDriver;

impl LiveDriver {
    /// Starts resolving `schedule` against `clock` at the configured
    /// cadence. The first tick fires immediately.
    ///
    /// The schedule snapshot is read-only for the lifetime of the task;
    /// viewing a newly fetched schedule means stopping this driver and
    /// spawning a fresh one.
    pub fn spawn(
        schedule: Arc<DaySchedule>,
        clock: Arc<dyn Clock>,
        config: DriverConfig,
    ) -> LiveHandle {
        let (view_tx, view_rx) = watch::channel(LiveView::NotApplicable);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.tick);
            loop {
                tokio::select! {
                    biased;
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        let now = clock.now();
                        let view = if now.date() == schedule.date {
                            LiveView::Resolved(resolve_at(&schedule, &now))
                        } else {
                            LiveView::NotApplicable
                        };
                        if view_tx.send(view).is_err() {
                            // Every consumer is gone; nothing left to drive.
                            break;
                        }
                    }
                }
            }
            log::debug!("live driver for {} stopped", schedule.date);
        });

        LiveHandle {
            shutdown: shutdown_tx,
            task,
            view: view_rx,
        }
    }
}

/// Handle to a running driver. Dropping it cancels the task: the
/// shutdown sender closes, the loop breaks on the next wakeup, and the
/// timer is released.
pub struct LiveHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
    view: watch::Receiver<LiveView>,
}

impl LiveHandle {
    /// A receiver over the published views. The channel is seeded with
    /// [`LiveView::NotApplicable`] until the first tick completes.
    pub fn subscribe(&self) -> watch::Receiver<LiveView> {
        self.view.clone()
    }

    /// The most recently published view.
    pub fn latest(&self) -> LiveView {
        self.view.borrow().clone()
    }

    /// Signals the task to stop. Ticks already dispatched complete; no
    /// further views are published.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Stops the task and waits for it to finish.
    pub async fn stopped(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
