//! Plugin registry interface and its manifest-backed implementation.
//!
//! The documentation pipeline only talks to a [`PluginRegistry`]. The
//! [`ManifestRegistry`] fills one from plugin manifests found in plugin
//! directories.

pub mod help;
mod manifest;
mod model;

#[cfg(test)]
mod tests;

pub use manifest::{LoadReport, ManifestRegistry, ParameterEntry, PluginEntry, PluginManifest};
pub use model::{Category, Direction, ParameterDescriptor, PluginInfo};

/// Read access to the set of loaded plugins.
pub trait PluginRegistry {
    /// Names of every loaded plugin.
    fn plugin_names(&self) -> Vec<String>;

    /// Metadata of the named plugin.
    fn plugin_info(&self, name: &str) -> Option<&PluginInfo>;

    /// Parameter descriptors of the named plugin, in declaration order.
    fn plugin_parameters(&self, name: &str) -> Option<&[ParameterDescriptor]>;

    /// Sorted names of the plugins registered in `category`.
    fn plugins_in_category(&self, category: &Category) -> Vec<String> {
        let mut names: Vec<String> = self
            .plugin_names()
            .into_iter()
            .filter(|name| {
                self.plugin_info(name)
                    .is_some_and(|info| &info.category == category)
            })
            .collect();
        names.sort();
        names
    }
}
