//! Composite discovery — several sources seen as one.

use std::sync::Arc;

use trialrun_core::discovery::DiscoverySource;
use trialrun_core::engine::TestEngine;
use trialrun_core::listener::ExecutionListener;

/// Concatenates the results of its sources, in the order they were added.
///
/// With no sources it discovers nothing.
#[derive(Default)]
pub struct CompositeDiscovery {
    sources: Vec<Arc<dyn DiscoverySource>>,
}

impl CompositeDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; it is queried after every source added before it.
    pub fn with_source(mut self, source: Arc<dyn DiscoverySource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl FromIterator<Arc<dyn DiscoverySource>> for CompositeDiscovery {
    fn from_iter<I: IntoIterator<Item = Arc<dyn DiscoverySource>>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

impl DiscoverySource for CompositeDiscovery {
    fn discover_engines(&self) -> Vec<Arc<dyn TestEngine>> {
        self.sources
            .iter()
            .flat_map(|source| source.discover_engines())
            .collect()
    }

    fn discover_listeners(&self) -> Vec<Arc<dyn ExecutionListener>> {
        self.sources
            .iter()
            .flat_map(|source| source.discover_listeners())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logging::LoggingListener;

    struct MockEngine(&'static str);

    impl TestEngine for MockEngine {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn catalog_with(ids: &'static [&'static str]) -> Arc<dyn DiscoverySource> {
        let mut catalog = Catalog::new();
        for &id in ids {
            catalog.register_engine(move || Arc::new(MockEngine(id)));
        }
        Arc::new(catalog)
    }

    #[test]
    fn no_sources_discovers_nothing() {
        let composite = CompositeDiscovery::new();
        assert!(composite.is_empty());
        assert!(composite.discover_engines().is_empty());
        assert!(composite.discover_listeners().is_empty());
    }

    #[test]
    fn sources_are_concatenated_in_order() {
        let composite = CompositeDiscovery::new()
            .with_source(catalog_with(&["a", "b"]))
            .with_source(catalog_with(&["c"]));
        assert_eq!(composite.len(), 2);

        let ids: Vec<String> = composite
            .discover_engines()
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicates_across_sources_are_kept() {
        let composite: CompositeDiscovery = [catalog_with(&["a"]), catalog_with(&["a"])]
            .into_iter()
            .collect();
        assert_eq!(composite.discover_engines().len(), 2);
    }

    #[test]
    fn listeners_come_from_every_source() {
        let composite = CompositeDiscovery::new()
            .with_source(Arc::new(Catalog::with_builtins()))
            .with_source(catalog_with(&[]))
            .with_source(Arc::new(Catalog::with_builtins()));

        let names: Vec<String> = composite
            .discover_listeners()
            .iter()
            .map(|l| l.name().to_string())
            .collect();
        assert_eq!(names, vec![LoggingListener::NAME, LoggingListener::NAME]);
    }
}
