//! DiscoverySource trait — where engines and listeners come from at runtime.
//!
//! The launcher factory is handed a discovery source instead of reaching for
//! a process-wide lookup, so a deterministic double can stand in for it.

use std::sync::Arc;

use crate::engine::TestEngine;
use crate::listener::ExecutionListener;

/// Enumerates the engine and listener implementations available to this process.
///
/// Both calls are synchronous. Either may return an empty sequence. The order
/// is defined by the source and must be preserved by callers.
pub trait DiscoverySource: Send + Sync {
    fn discover_engines(&self) -> Vec<Arc<dyn TestEngine>>;

    fn discover_listeners(&self) -> Vec<Arc<dyn ExecutionListener>>;
}

impl<T: DiscoverySource + ?Sized> DiscoverySource for Arc<T> {
    fn discover_engines(&self) -> Vec<Arc<dyn TestEngine>> {
        (**self).discover_engines()
    }

    fn discover_listeners(&self) -> Vec<Arc<dyn ExecutionListener>> {
        (**self).discover_listeners()
    }
}
