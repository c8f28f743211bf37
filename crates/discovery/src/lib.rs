//! Discovery sources for Trialrun.
//!
//! A discovery source tells the launcher factory which engines and listeners
//! exist in this process. Available sources:
//! - **Catalog** — explicit registry of engine/listener factories
//! - **Composite** — chains several sources, in order
//! - **Logging** — built-in listener that reports through `tracing`

pub mod catalog;
pub mod composite;
pub mod logging;

pub use catalog::Catalog;
pub use composite::CompositeDiscovery;
pub use logging::LoggingListener;
