//! plugindoc - reStructuredText reference generator for graph plugins.
//!
//! Loads plugin manifests from plugin directories, then writes one document
//! describing every plugin: its description, a table of its parameters and
//! an example showing how to call it from Python.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plugindoc::{config::DocgenConfig, docs::DocsGenerator, registry::ManifestRegistry};
//!
//! let config = DocgenConfig::resolve(None)?;
//! let registry = ManifestRegistry::from_dirs(&config.plugin_dirs());
//!
//! DocsGenerator::new()
//!     .with_output(&config.output)
//!     .generate_all(&registry)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Configuration file and environment overrides.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// reStructuredText generation from plugin metadata.
pub mod docs;

/// Plugin metadata model and registries.
pub mod registry;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{PluginDocError, Result};
