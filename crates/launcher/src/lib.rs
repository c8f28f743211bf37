//! Launcher assembly for Trialrun.
//!
//! [`LauncherFactory`] merges what a [`DiscoverySource`] finds with what a
//! [`LauncherConfig`] adds explicitly, and hands the result to a
//! [`DefaultLauncher`]:
//!
//! 1. Engines: discovered ones (if enabled), then configured ones. No
//!    de-duplication.
//! 2. The launcher is constructed; it rejects an empty engine set.
//! 3. Listeners: discovered ones (if enabled), then configured ones, each
//!    registered on its own.
//!
//! The factory keeps no state between calls and does no logging; errors go
//! straight back to the caller.

use std::path::Path;
use std::sync::Arc;

use trialrun_config::LauncherSettings;
use trialrun_core::discovery::DiscoverySource;
use trialrun_core::engine::TestEngine;
use trialrun_core::error::{Error, Result};
use trialrun_core::launcher::{DefaultLauncher, Launcher};
use trialrun_discovery::Catalog;

pub use trialrun_config::{LauncherConfig, LauncherConfigBuilder};

/// Builds launchers from a discovery source and a [`LauncherConfig`].
#[derive(Clone)]
pub struct LauncherFactory {
    discovery: Arc<dyn DiscoverySource>,
}

impl LauncherFactory {
    /// Create a factory that queries `discovery` for engines and listeners.
    pub fn new(discovery: Arc<dyn DiscoverySource>) -> Self {
        Self { discovery }
    }

    /// Create a launcher with the default configuration.
    ///
    /// Fails if the discovery source yields no engines.
    pub fn create(&self) -> Result<DefaultLauncher> {
        self.create_with(Some(LauncherConfig::default()))
    }

    /// Create a launcher from `config`.
    ///
    /// Fails with [`Error::PreconditionViolation`] when `config` is `None`
    /// (before the discovery source is touched) or when no engine is found
    /// and none is configured (before any listener is registered).
    pub fn create_with(&self, config: Option<LauncherConfig>) -> Result<DefaultLauncher> {
        let config =
            config.ok_or_else(|| Error::precondition("configuration must not be null"))?;

        let engine_auto = config.is_engine_auto_registration_enabled();
        let listener_auto = config.is_listener_auto_registration_enabled();
        let (additional_engines, additional_listeners) = config.into_parts();

        let mut engines: Vec<Arc<dyn TestEngine>> = Vec::new();
        if engine_auto {
            engines.extend(self.discovery.discover_engines());
        }
        engines.extend(additional_engines);

        let launcher = DefaultLauncher::new(engines)?;

        if listener_auto {
            for listener in self.discovery.discover_listeners() {
                launcher.register_listeners(std::slice::from_ref(&listener));
            }
        }
        for listener in &additional_listeners {
            launcher.register_listeners(std::slice::from_ref(listener));
        }

        Ok(launcher)
    }

    /// Create a launcher using the settings file and environment overrides.
    ///
    /// The loaded flags seed the builder, `customize` adds instances.
    pub fn create_from_settings<F>(
        &self,
        path: Option<&Path>,
        customize: F,
    ) -> Result<DefaultLauncher>
    where
        F: FnOnce(LauncherConfigBuilder) -> LauncherConfigBuilder,
    {
        let settings = match path {
            Some(path) => {
                let mut settings = LauncherSettings::load_from(path)?;
                settings.apply_overrides(|key| std::env::var(key).ok())?;
                settings
            }
            None => LauncherSettings::load()?,
        };
        self.create_with(Some(customize(settings.to_builder()).build()))
    }
}

impl Default for LauncherFactory {
    /// A factory over [`Catalog::with_builtins`].
    fn default() -> Self {
        Self::new(Arc::new(Catalog::with_builtins()))
    }
}

impl std::fmt::Debug for LauncherFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LauncherFactory").finish_non_exhaustive()
    }
}

/// Create a launcher from `discovery` with the default configuration.
pub fn create(discovery: Arc<dyn DiscoverySource>) -> Result<DefaultLauncher> {
    LauncherFactory::new(discovery).create()
}
