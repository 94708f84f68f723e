pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use std::time::Duration;

impl App {
    /// Paced run loop: one tick every `1 / target_tps` seconds while running,
    /// until `max_ticks` is reached or Ctrl+C arrives.
    ///
    /// While stopped the loop idles on the timer without stepping.
    pub async fn run(&mut self, max_ticks: Option<u64>) -> Result<()> {
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown.request_shutdown();
        });

        let period = Duration::from_micros(1_000_000 / self.world.config.target_tps.max(1));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut ticks = 0u64;
        while !self.shutdown.is_shutdown_requested() {
            interval.tick().await;
            if !self.running {
                continue;
            }
            self.tick()?;
            ticks += 1;
            if max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }
        }

        let app: &App = self;
        app.shutdown.cleanup(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;

    #[tokio::test]
    async fn test_paced_run_stops_at_max_ticks() {
        let mut config = AppConfig::default();
        config.world.seed = Some(9);
        config.target_tps = 1000;
        let mut app = App::new(config).expect("Failed to create app");
        app.run(Some(4)).await.unwrap();
        assert_eq!(app.world.tick, 4);
        assert_eq!(app.history.len(), 4);
    }

    #[tokio::test]
    async fn test_requested_shutdown_ends_unbounded_run() {
        let mut config = AppConfig::default();
        config.world.seed = Some(9);
        let mut app = App::new(config).expect("Failed to create app");
        let handle = app.shutdown.clone();
        handle.request_shutdown();
        app.run(None).await.unwrap();
        assert_eq!(app.world.tick, 0);
        assert!(app.history.is_empty());
    }
}
