//! Graceful shutdown handling for the run loop.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared shutdown flag plus what to do on the way out.
///
/// Clones share the flag, so a signal task can hold one and request
/// shutdown for the loop that owns the original.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    save_on_exit: bool,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            save_on_exit: true,
        }
    }

    /// Sets whether to archive the population history on exit.
    pub fn set_save_on_exit(&mut self, save: bool) {
        self.save_on_exit = save;
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    #[must_use]
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn should_save_on_exit(&self) -> bool {
        self.save_on_exit
    }

    /// Performs cleanup operations before shutdown.
    pub fn cleanup(&self, app: &crate::app::App) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");
        if self.save_on_exit {
            app.save_state()?;
        }
        tracing::info!(
            ticks = app.world.tick,
            elapsed_ms = app.metrics.elapsed().as_millis() as u64,
            mean_tick_us = app.metrics.mean_tick_duration().as_micros() as u64,
            "Cleanup complete"
        );
        Ok(())
    }
}
