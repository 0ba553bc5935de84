use crate::{BotController, BotMetrics};
use std::future::Future;
use std::time::Duration;
use tracerybot_error::TracerybotResult;
use tracerybot_interface::{PlatformClient, TextGenerator};
use tracing::{debug, error, info, instrument};

/// Drives a [`BotController`] forever, sleeping between cycles.
pub struct BotServer<P: PlatformClient, G: TextGenerator> {
    controller: BotController<P, G>,
    cycle_interval: Duration,
}

impl<P: PlatformClient, G: TextGenerator> BotServer<P, G> {
    /// Creates a new bot server.
    pub fn new(controller: BotController<P, G>, cycle_interval: Duration) -> Self {
        Self {
            controller,
            cycle_interval,
        }
    }

    /// Shared handle to the controller's counters.
    pub fn metrics(&self) -> BotMetrics {
        self.controller.metrics().clone()
    }

    /// Runs cycles until one fails.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by a cycle.
    #[instrument(skip(self), fields(cycle_interval = ?self.cycle_interval))]
    pub async fn run(mut self) -> TracerybotResult<()> {
        info!("Starting bot server");

        loop {
            if let Err(e) = self.controller.run_one_cycle().await {
                error!(error = %e, "Bot stopped");
                info!(metrics = ?self.controller.metrics().snapshot(), "Final metrics");
                return Err(e);
            }
            debug!(metrics = ?self.controller.metrics().snapshot(), "Metrics");
            tokio::time::sleep(self.cycle_interval).await;
        }
    }

    /// Runs cycles until one fails or `shutdown` completes.
    ///
    /// Shutdown takes effect at the next await point, mid-cycle included.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by a cycle.
    pub async fn run_until<F>(self, shutdown: F) -> TracerybotResult<()>
    where
        F: Future<Output = ()>,
    {
        let metrics = self.metrics();
        tokio::select! {
            result = self.run() => result,
            _ = shutdown => {
                info!(metrics = ?metrics.snapshot(), "Shutdown requested, stopping bot server");
                Ok(())
            }
        }
    }
}
