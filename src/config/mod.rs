//! Configuration of the documentation generator.
//!
//! Settles where plugins are loaded from and where the document is
//! written. Values come from an optional TOML file, then environment
//! overrides are applied on top.

mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use loading::{
    BUILD_DIR_ENV, GUI_PYTHON_PLUGINS_DIR_ENV, GUI_PYTHON_PLUGINS_DIR_ENV_ALIAS,
    PYTHON_PLUGINS_DIR_ENV,
};
pub use paths::ConfigPaths;

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::docs::DEFAULT_OUTPUT;

/// Plugin subdirectories of a build tree, relative to `<build_dir>/plugins`.
pub const DEFAULT_PLUGIN_SUBDIRS: [&str; 11] = [
    "clustering",
    "colors",
    "export",
    "general",
    "import",
    "layout",
    "metric",
    "selection",
    "sizes",
    "string",
    "test",
];

/// Main configuration structure.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DocgenConfig {
    /// General application settings.
    pub general: GeneralConfig,

    /// Build tree holding the compiled plugins.
    pub build_dir: Option<PathBuf>,

    /// Subdirectories of `<build_dir>/plugins` to load plugins from.
    pub plugin_subdirs: Vec<String>,

    /// Additional plugin directories, loaded after the build tree ones.
    pub extra_plugin_dirs: Vec<PathBuf>,

    /// Path of the generated document.
    pub output: PathBuf,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            build_dir: None,
            plugin_subdirs: DEFAULT_PLUGIN_SUBDIRS.map(String::from).to_vec(),
            extra_plugin_dirs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl DocgenConfig {
    /// Plugin directories in loading order.
    ///
    /// Build tree subdirectories come first, extra directories last.
    /// Without a build directory only the extra directories are returned.
    pub fn plugin_dirs(&self) -> Vec<PathBuf> {
        let build_dirs = self.build_dir.iter().flat_map(|build_dir| {
            let plugins = build_dir.join("plugins");
            self.plugin_subdirs.iter().map(move |sub| plugins.join(sub))
        });

        build_dirs
            .chain(self.extra_plugin_dirs.iter().cloned())
            .collect()
    }
}
