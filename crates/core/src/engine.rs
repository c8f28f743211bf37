//! TestEngine trait — the abstraction over pluggable test backends.
//!
//! An engine knows how to find and run tests of one particular flavour.
//! The launcher only ever looks at an engine's identity; everything else
//! is the engine's own business.

/// The core TestEngine trait.
pub trait TestEngine: Send + Sync {
    /// Unique identifier of this engine (e.g., "spec-runner", "bench").
    fn id(&self) -> &str;

    /// Group the engine is published under, if known.
    fn group_id(&self) -> Option<&str> {
        None
    }

    /// Artifact the engine is published as, if known.
    fn artifact_id(&self) -> Option<&str> {
        None
    }

    /// Engine version, if known.
    fn version(&self) -> Option<&str> {
        None
    }
}

impl std::fmt::Debug for dyn TestEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestEngine")
            .field("id", &self.id())
            .field("version", &self.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareEngine;

    impl TestEngine for BareEngine {
        fn id(&self) -> &str {
            "bare"
        }
    }

    struct PublishedEngine;

    impl TestEngine for PublishedEngine {
        fn id(&self) -> &str {
            "published"
        }
        fn group_id(&self) -> Option<&str> {
            Some("org.example")
        }
        fn artifact_id(&self) -> Option<&str> {
            Some("published-engine")
        }
        fn version(&self) -> Option<&str> {
            Some("1.2.0")
        }
    }

    #[test]
    fn metadata_defaults_to_none() {
        let engine = BareEngine;
        assert_eq!(engine.id(), "bare");
        assert!(engine.group_id().is_none());
        assert!(engine.artifact_id().is_none());
        assert!(engine.version().is_none());
    }

    #[test]
    fn debug_shows_identity() {
        let engine: &dyn TestEngine = &PublishedEngine;
        let debug = format!("{engine:?}");
        assert!(debug.contains("published"));
        assert!(debug.contains("1.2.0"));
    }
}
