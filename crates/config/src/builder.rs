//! `LauncherConfig` and its builder.
//!
//! The config is an immutable snapshot: build it, hand it to the launcher
//! factory, forget about it.

use std::sync::Arc;

use trialrun_core::engine::TestEngine;
use trialrun_core::listener::ExecutionListener;

use crate::LauncherSettings;

/// Options that steer how a launcher is assembled.
#[derive(Clone)]
pub struct LauncherConfig {
    engine_auto_registration_enabled: bool,
    listener_auto_registration_enabled: bool,
    additional_engines: Vec<Arc<dyn TestEngine>>,
    additional_listeners: Vec<Arc<dyn ExecutionListener>>,
}

impl LauncherConfig {
    pub fn builder() -> LauncherConfigBuilder {
        LauncherConfigBuilder::default()
    }

    /// Whether engines from the discovery source are picked up.
    pub fn is_engine_auto_registration_enabled(&self) -> bool {
        self.engine_auto_registration_enabled
    }

    /// Whether listeners from the discovery source are picked up.
    pub fn is_listener_auto_registration_enabled(&self) -> bool {
        self.listener_auto_registration_enabled
    }

    /// Engines appended after the discovered ones, in insertion order.
    pub fn additional_engines(&self) -> &[Arc<dyn TestEngine>] {
        &self.additional_engines
    }

    /// Listeners registered after the discovered ones, in insertion order.
    pub fn additional_listeners(&self) -> &[Arc<dyn ExecutionListener>] {
        &self.additional_listeners
    }

    /// Split into the owned engine and listener lists.
    pub fn into_parts(self) -> (Vec<Arc<dyn TestEngine>>, Vec<Arc<dyn ExecutionListener>>) {
        (self.additional_engines, self.additional_listeners)
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        LauncherConfigBuilder::default().build()
    }
}

impl std::fmt::Debug for LauncherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let engines: Vec<&str> = self.additional_engines.iter().map(|e| e.id()).collect();
        let listeners: Vec<&str> = self.additional_listeners.iter().map(|l| l.name()).collect();
        f.debug_struct("LauncherConfig")
            .field(
                "engine_auto_registration_enabled",
                &self.engine_auto_registration_enabled,
            )
            .field(
                "listener_auto_registration_enabled",
                &self.listener_auto_registration_enabled,
            )
            .field("additional_engines", &engines)
            .field("additional_listeners", &listeners)
            .finish()
    }
}

/// Accumulates options for a [`LauncherConfig`].
pub struct LauncherConfigBuilder {
    engine_auto_registration_enabled: bool,
    listener_auto_registration_enabled: bool,
    engines: Vec<Arc<dyn TestEngine>>,
    listeners: Vec<Arc<dyn ExecutionListener>>,
}

impl Default for LauncherConfigBuilder {
    fn default() -> Self {
        Self {
            engine_auto_registration_enabled: true,
            listener_auto_registration_enabled: true,
            engines: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl LauncherConfigBuilder {
    /// Start from loaded settings instead of the built-in defaults.
    pub fn from_settings(settings: &LauncherSettings) -> Self {
        Self::default()
            .enable_engine_auto_registration(settings.launcher.engine_auto_registration)
            .enable_listener_auto_registration(settings.launcher.listener_auto_registration)
    }

    pub fn enable_engine_auto_registration(mut self, enabled: bool) -> Self {
        self.engine_auto_registration_enabled = enabled;
        self
    }

    pub fn enable_listener_auto_registration(mut self, enabled: bool) -> Self {
        self.listener_auto_registration_enabled = enabled;
        self
    }

    /// Append one engine. Duplicates are kept.
    pub fn add_engine(mut self, engine: Arc<dyn TestEngine>) -> Self {
        self.engines.push(engine);
        self
    }

    pub fn add_engines(mut self, engines: impl IntoIterator<Item = Arc<dyn TestEngine>>) -> Self {
        self.engines.extend(engines);
        self
    }

    /// Append one listener. Duplicates are kept.
    pub fn add_listener(mut self, listener: Arc<dyn ExecutionListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn add_listeners(
        mut self,
        listeners: impl IntoIterator<Item = Arc<dyn ExecutionListener>>,
    ) -> Self {
        self.listeners.extend(listeners);
        self
    }

    pub fn build(self) -> LauncherConfig {
        LauncherConfig {
            engine_auto_registration_enabled: self.engine_auto_registration_enabled,
            listener_auto_registration_enabled: self.listener_auto_registration_enabled,
            additional_engines: self.engines,
            additional_listeners: self.listeners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubEngine(&'static str);

    impl TestEngine for StubEngine {
        fn id(&self) -> &str {
            self.0
        }
    }

    struct StubListener(&'static str);

    impl ExecutionListener for StubListener {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn engine(id: &'static str) -> Arc<dyn TestEngine> {
        Arc::new(StubEngine(id))
    }

    fn listener(name: &'static str) -> Arc<dyn ExecutionListener> {
        Arc::new(StubListener(name))
    }

    #[test]
    fn defaults_enable_both_and_add_nothing() {
        let config = LauncherConfig::builder().build();
        assert!(config.is_engine_auto_registration_enabled());
        assert!(config.is_listener_auto_registration_enabled());
        assert!(config.additional_engines().is_empty());
        assert!(config.additional_listeners().is_empty());
    }

    #[test]
    fn default_matches_empty_builder() {
        let config = LauncherConfig::default();
        assert!(config.is_engine_auto_registration_enabled());
        assert!(config.is_listener_auto_registration_enabled());
    }

    #[test]
    fn toggles_are_independent() {
        let config = LauncherConfig::builder()
            .enable_engine_auto_registration(false)
            .build();
        assert!(!config.is_engine_auto_registration_enabled());
        assert!(config.is_listener_auto_registration_enabled());

        let config = LauncherConfig::builder()
            .enable_listener_auto_registration(false)
            .build();
        assert!(config.is_engine_auto_registration_enabled());
        assert!(!config.is_listener_auto_registration_enabled());
    }

    #[test]
    fn engines_keep_insertion_order_and_duplicates() {
        let config = LauncherConfig::builder()
            .add_engine(engine("b"))
            .add_engines([engine("a"), engine("b")])
            .build();
        let ids: Vec<&str> = config.additional_engines().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn listeners_keep_insertion_order() {
        let config = LauncherConfig::builder()
            .add_listeners([listener("x"), listener("y")])
            .add_listener(listener("z"))
            .build();
        let (engines, listeners) = config.into_parts();
        assert!(engines.is_empty());
        let names: Vec<&str> = listeners.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn from_settings_copies_flags() {
        let mut settings = LauncherSettings::default();
        settings.launcher.engine_auto_registration = false;
        let config = LauncherConfigBuilder::from_settings(&settings).build();
        assert!(!config.is_engine_auto_registration_enabled());
        assert!(config.is_listener_auto_registration_enabled());
    }

    #[test]
    fn debug_lists_identities() {
        let config = LauncherConfig::builder()
            .add_engine(engine("spec"))
            .add_listener(listener("summary"))
            .build();
        let debug = format!("{config:?}");
        assert!(debug.contains("spec"));
        assert!(debug.contains("summary"));
    }
}
