//! Catalog — an explicit registry of engine and listener factories.
//!
//! Plugins register a factory once at startup. Every discovery call runs the
//! factories again, so each launcher gets its own fresh instances, in the
//! order the factories were registered.

use std::sync::Arc;

use tracing::debug;
use trialrun_core::discovery::DiscoverySource;
use trialrun_core::engine::TestEngine;
use trialrun_core::listener::ExecutionListener;

use crate::logging::LoggingListener;

/// Produces a fresh engine instance.
pub type EngineFactory = Box<dyn Fn() -> Arc<dyn TestEngine> + Send + Sync>;

/// Produces a fresh listener instance.
pub type ListenerFactory = Box<dyn Fn() -> Arc<dyn ExecutionListener> + Send + Sync>;

/// Registry of engine/listener factories, usable as a [`DiscoverySource`].
#[derive(Default)]
pub struct Catalog {
    engines: Vec<EngineFactory>,
    listeners: Vec<ListenerFactory>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in listeners already registered.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        catalog.register_listener(|| Arc::new(LoggingListener));
        catalog
    }

    /// Register an engine factory.
    pub fn register_engine<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn TestEngine> + Send + Sync + 'static,
    {
        self.engines.push(Box::new(factory));
        self
    }

    /// Register a listener factory.
    pub fn register_listener<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn ExecutionListener> + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(factory));
        self
    }

    /// Number of registered engine factories.
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Number of registered listener factories.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the catalog has no factories at all.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty() && self.listeners.is_empty()
    }
}

impl DiscoverySource for Catalog {
    fn discover_engines(&self) -> Vec<Arc<dyn TestEngine>> {
        let engines: Vec<_> = self.engines.iter().map(|factory| factory()).collect();
        for engine in &engines {
            debug!(engine = %engine.id(), "Discovered engine");
        }
        engines
    }

    fn discover_listeners(&self) -> Vec<Arc<dyn ExecutionListener>> {
        let listeners: Vec<_> = self.listeners.iter().map(|factory| factory()).collect();
        for listener in &listeners {
            debug!(listener = %listener.name(), "Discovered listener");
        }
        listeners
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("engines", &self.engines.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockEngine(&'static str);

    impl TestEngine for MockEngine {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.discover_engines().is_empty());
        assert!(catalog.discover_listeners().is_empty());
    }

    #[test]
    fn builtins_register_logging_listener() {
        let catalog = Catalog::with_builtins();
        assert_eq!(catalog.engine_count(), 0);
        assert_eq!(catalog.listener_count(), 1);

        let listeners = catalog.discover_listeners();
        assert_eq!(listeners[0].name(), LoggingListener::NAME);
    }

    #[test]
    fn discovery_follows_registration_order() {
        let mut catalog = Catalog::new();
        catalog
            .register_engine(|| Arc::new(MockEngine("b")))
            .register_engine(|| Arc::new(MockEngine("a")));

        let ids: Vec<String> = catalog
            .discover_engines()
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn each_discovery_builds_fresh_instances() {
        let mut catalog = Catalog::new();
        catalog.register_engine(|| Arc::new(MockEngine("a")));

        let first = catalog.discover_engines();
        let second = catalog.discover_engines();
        assert!(!Arc::ptr_eq(&first[0], &second[0]));
    }

    #[test]
    fn shared_instance_factory() {
        let shared: Arc<dyn TestEngine> = Arc::new(MockEngine("singleton"));
        let mut catalog = Catalog::new();
        let handle = Arc::clone(&shared);
        catalog.register_engine(move || Arc::clone(&handle));

        let found = catalog.discover_engines();
        assert!(Arc::ptr_eq(&found[0], &shared));
    }
}
