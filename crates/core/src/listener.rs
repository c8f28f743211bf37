//! ExecutionListener trait — observers attached to a launcher.
//!
//! What a listener does once attached belongs to the execution layer.
//! Here it only gets told when it has been registered.

use crate::launcher::LauncherId;

pub trait ExecutionListener: Send + Sync {
    /// Human-readable listener name (e.g., "logging", "summary").
    fn name(&self) -> &str;

    /// Called once per registration on a launcher.
    ///
    /// A listener registered twice is told twice.
    fn on_registered(&self, _launcher: &LauncherId) {}
}

impl std::fmt::Debug for dyn ExecutionListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionListener")
            .field("name", &self.name())
            .finish()
    }
}
