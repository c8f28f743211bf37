//! Launcher — the coordinator that owns engines and listeners.
//!
//! A launcher is handed its engines once, at construction, and never gains or
//! loses one afterwards. Listeners are the opposite: anyone holding the
//! launcher may append more at any time, and none are ever removed.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::engine::TestEngine;
use crate::error::{Error, Result};
use crate::listener::ExecutionListener;

/// Unique identifier for a launcher instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LauncherId(pub Uuid);

impl LauncherId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LauncherId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LauncherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The core Launcher trait.
pub trait Launcher: Send + Sync {
    /// Unique ID for this launcher instance.
    fn id(&self) -> &LauncherId;

    /// The engines this launcher was built with, in construction order.
    fn engines(&self) -> &[Arc<dyn TestEngine>];

    /// Append listeners, in the given order.
    fn register_listeners(&self, listeners: &[Arc<dyn ExecutionListener>]);

    /// Snapshot of every registered listener, in registration order.
    fn listeners(&self) -> Vec<Arc<dyn ExecutionListener>>;

    /// Engine ids in construction order.
    fn engine_ids(&self) -> Vec<&str> {
        self.engines().iter().map(|e| e.id()).collect()
    }
}

/// The stock launcher implementation.
pub struct DefaultLauncher {
    id: LauncherId,
    engines: Vec<Arc<dyn TestEngine>>,
    listeners: RwLock<Vec<Arc<dyn ExecutionListener>>>,
}

impl DefaultLauncher {
    /// Create a launcher over a fixed, non-empty engine sequence.
    ///
    /// Engines sharing an id are all kept; the duplicate is only reported.
    pub fn new(engines: Vec<Arc<dyn TestEngine>>) -> Result<Self> {
        if engines.is_empty() {
            return Err(Error::precondition(
                "Cannot create Launcher without at least one TestEngine; \
                 consider registering an engine with the discovery source or the launcher config",
            ));
        }

        let id = LauncherId::new();
        let mut seen = HashSet::new();
        for engine in &engines {
            if !seen.insert(engine.id()) {
                warn!(launcher = %id, engine = %engine.id(), "Duplicate engine id");
            }
            debug!(
                launcher = %id,
                engine = %engine.id(),
                group = engine.group_id().unwrap_or("-"),
                artifact = engine.artifact_id().unwrap_or("-"),
                version = engine.version().unwrap_or("-"),
                "Attached engine"
            );
        }

        Ok(Self {
            id,
            engines,
            listeners: RwLock::new(Vec::new()),
        })
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Launcher for DefaultLauncher {
    fn id(&self) -> &LauncherId {
        &self.id
    }

    fn engines(&self) -> &[Arc<dyn TestEngine>] {
        &self.engines
    }

    fn register_listeners(&self, listeners: &[Arc<dyn ExecutionListener>]) {
        for listener in listeners {
            // Lock is released before the callback; a listener may register others.
            self.listeners
                .write()
                .unwrap_or_else(|e| e.into_inner())
                .push(Arc::clone(listener));
            listener.on_registered(&self.id);
            debug!(launcher = %self.id, listener = %listener.name(), "Registered listener");
        }
    }

    fn listeners(&self) -> Vec<Arc<dyn ExecutionListener>> {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl std::fmt::Debug for DefaultLauncher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultLauncher")
            .field("id", &self.id)
            .field("engines", &self.engine_ids())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
