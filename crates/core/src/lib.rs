//! # Trialrun Core
//!
//! Domain types, traits, and error definitions for the Trialrun test launcher.
//! This crate has **zero framework dependencies** — it defines the contracts
//! that engines, listeners and discovery sources implement against.
//!
//! ## Design Philosophy
//!
//! Every pluggable capability is defined as a trait here. Implementations live
//! in their respective crates. This enables:
//! - Swapping discovery mechanisms without touching the launcher
//! - Easy testing with spy/stub engines and listeners
//! - Clean dependency graph (all crates depend inward on core)

pub mod discovery;
pub mod engine;
pub mod error;
pub mod launcher;
pub mod listener;

// Re-export key types at crate root for ergonomics
pub use discovery::DiscoverySource;
pub use engine::TestEngine;
pub use error::{Error, Result};
pub use launcher::{DefaultLauncher, Launcher, LauncherId};
pub use listener::ExecutionListener;
