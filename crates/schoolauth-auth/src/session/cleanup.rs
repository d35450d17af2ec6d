//! Periodic removal of expired sessions.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{error, info};

use super::manager::SessionManager;

/// Background task sweeping expired sessions out of the backend.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    manager: SessionManager,
    interval: Duration,
}

impl SessionCleanup {
    /// Creates a cleanup task sweeping every `interval_minutes`.
    pub fn new(manager: SessionManager, interval_minutes: u64) -> Self {
        Self {
            manager,
            interval: Duration::from_secs(interval_minutes.max(1) * 60),
        }
    }

    /// Run a single sweep. Failures are logged, never propagated.
    pub async fn run_cleanup(&self) -> u64 {
        match self.manager.purge_expired().await {
            Ok(0) => 0,
            Ok(removed) => {
                info!(removed, "Expired sessions removed");
                removed
            }
            Err(e) => {
                error!(error = %e, "Session cleanup failed");
                0
            }
        }
    }

    /// Sweep on every tick until the cancel signal flips to `true`.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Session cleanup started"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.run_cleanup().await;
                }
            }
        }

        info!("Session cleanup stopped");
    }
}
