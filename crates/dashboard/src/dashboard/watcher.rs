use crate::dashboard::Dashboard;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::broadcast,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::info;

/// Background task that polls the store at a fixed interval.
pub struct OrderWatcher {
    dashboard: Arc<Dashboard>,
    interval: Duration,
}

impl OrderWatcher {
    pub fn new(dashboard: Arc<Dashboard>, interval: Duration) -> Self {
        Self {
            dashboard,
            interval,
        }
    }

    pub fn spawn(self, shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    /// Each poll completes before the next tick is awaited, so polls never overlap.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "👀 Watching for new orders every {}s",
            self.interval.as_secs()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.dashboard.poll().await;
                }
                _ = shutdown.recv() => {
                    info!("🛑 Order watcher stopped");
                    break;
                }
            }
        }
    }
}
