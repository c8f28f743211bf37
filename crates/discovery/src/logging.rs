//! Logging listener — reports launcher activity through `tracing`.

use tracing::info;
use trialrun_core::launcher::LauncherId;
use trialrun_core::listener::ExecutionListener;

/// Built-in listener that logs each time it is attached to a launcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl LoggingListener {
    pub const NAME: &'static str = "logging";
}

impl ExecutionListener for LoggingListener {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_registered(&self, launcher: &LauncherId) {
        info!(launcher = %launcher, listener = Self::NAME, "Listener attached");
    }
}
