use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{
    markup::translate_markup,
    rst::{DocumentWriter, PREAMBLE, SectionLevel},
    sections::{anchor, introduction},
    snippet::python_snippet,
    table::build_parameter_table,
};
use crate::registry::{Category, PluginInfo, PluginRegistry};

/// Default name of the generated document.
pub const DEFAULT_OUTPUT: &str = "talipotpluginsdocumentation.rst";

const TITLE: &str = "Talipot plugins documentation";

const INTRODUCTION: &str = r"
In this section, you can find some documentation regarding the C++ algorithm
plugins bundled in the Talipot software but also with the Talipot Python
modules installable through the pip tool. In particular, an exhaustive
description of the input and output parameters for each plugin is given.
To learn how to call all these algorithms in Python, you can refer to the
:ref:`Applying an algorithm on a graph <applyGraphAlgorithm>` section.
The plugins documentation is ordered according to their type.

.. warning:: If you use the Talipot Python bindings trough the classical Python
             interpreter, some plugins (Color Mapping, Convolution Clustering,
             File System Directory, GEXF, SVG Export, Website) require the
             :mod:`talipotgui` module to be imported before they can be called
             as they use Qt under the hood.

";

/// Plugins of a registry grouped by category, each group sorted by name.
pub type CategoryGroups<'a> = BTreeMap<Category, Vec<&'a PluginInfo>>;

/// Generates the reStructuredText reference of every loaded plugin.
///
/// Plugins are documented per category, with a description, a parameter
/// table and a Python calling example for each of them.
pub struct DocsGenerator {
    output: PathBuf,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl DocsGenerator {
    /// Creates a generator writing to the default output file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output file.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Output file of [`generate_all`](Self::generate_all).
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Writes the whole document to the output file.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the output file cannot be created
    /// and `DocsError::Io` if writing to it fails.
    pub fn generate_all(&self, registry: &impl PluginRegistry) -> Result<(), DocsError> {
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                DocsError::FileWrite(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    err
                ))
            })?;
        }

        let file = File::create(&self.output).map_err(|err| {
            DocsError::FileWrite(format!(
                "Failed to create {}: {}",
                self.output.display(),
                err
            ))
        })?;

        let mut writer = DocumentWriter::new(BufWriter::new(file));
        let documented = self.render_document(registry, &mut writer)?;
        writer.flush()?;

        info!(
            "Generated documentation for {} plugins in {}",
            documented,
            self.output.display()
        );
        Ok(())
    }

    /// Renders the subsection of a single plugin.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidPluginName` if no documented plugin has
    /// that name. Plugins of UI-only categories are not documented.
    pub fn generate_plugin(
        &self,
        registry: &impl PluginRegistry,
        name: &str,
    ) -> Result<String, DocsError> {
        let plugin = registry
            .plugin_info(name)
            .filter(|info| !info.category.is_ui_only())
            .ok_or_else(|| DocsError::InvalidPluginName(name.to_string()))?;

        let mut writer = DocumentWriter::new(Vec::new());
        write_plugin(registry, plugin, &mut writer)?;

        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Writes the whole document and returns the number of documented
    /// plugins.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Io` if the writer fails.
    pub fn render_document<W: Write>(
        &self,
        registry: &impl PluginRegistry,
        writer: &mut DocumentWriter<W>,
    ) -> Result<usize, DocsError> {
        writer.line(PREAMBLE)?;
        writer.paragraph(".. py:currentmodule:: talipot")?;
        writer.paragraph(".. _talipotpluginsdoc:")?;
        writer.section(TITLE, SectionLevel::Title)?;
        writer.line(INTRODUCTION)?;

        let mut documented = 0;
        for (category, plugins) in group_by_category(registry) {
            if category.is_ui_only() {
                debug!("Skipping {} plugins of UI category {}", plugins.len(), category);
                continue;
            }

            writer.section(category.label(), SectionLevel::Category)?;
            if let Some(anchor) = anchor(&category) {
                writer.paragraph(&format!(".. _{anchor}:"))?;
            }
            if let Some(introduction) = introduction(&category) {
                writer.paragraph(&introduction)?;
            }

            for plugin in plugins {
                write_plugin(registry, plugin, writer)?;
                documented += 1;
            }
        }

        Ok(documented)
    }

    /// Returns the sorted names of every documented plugin.
    pub fn list_plugins(&self, registry: &impl PluginRegistry) -> Vec<String> {
        let mut names: Vec<String> = registry
            .plugin_names()
            .into_iter()
            .filter(|name| {
                registry
                    .plugin_info(name)
                    .is_some_and(|info| !info.category.is_ui_only())
            })
            .collect();
        names.sort();
        names
    }
}

/// Groups the plugins of a registry by category.
///
/// Categories iterate in label order and plugins by name. Names the registry
/// lists without metadata are skipped.
pub fn group_by_category(registry: &impl PluginRegistry) -> CategoryGroups<'_> {
    let mut groups = CategoryGroups::new();

    for name in registry.plugin_names() {
        let Some(info) = registry.plugin_info(&name) else {
            warn!("Plugin {} has no metadata, skipping", name);
            continue;
        };
        groups.entry(info.category.clone()).or_default().push(info);
    }

    for plugins in groups.values_mut() {
        plugins.sort_by(|a, b| a.name.cmp(&b.name));
    }

    groups
}

fn write_plugin<W: Write>(
    registry: &impl PluginRegistry,
    plugin: &PluginInfo,
    writer: &mut DocumentWriter<W>,
) -> Result<(), DocsError> {
    let params = registry.plugin_parameters(&plugin.name).unwrap_or_default();
    let table = build_parameter_table(params);
    debug!(
        "Documenting {} ({} of {} parameters shown)",
        plugin.name,
        table.rows.len(),
        params.len()
    );

    writer.section(&plugin.name, SectionLevel::Plugin)?;
    writer.section("Description", SectionLevel::Part)?;
    writer.paragraph(&translate_markup(&plugin.info))?;

    if !table.is_empty() {
        writer.section("Parameters", SectionLevel::Part)?;
        writer.paragraph(&table.to_grid())?;
    }

    writer.section("Calling the plugin from Python", SectionLevel::Part)?;
    writer.paragraph("To call that plugin from Python, use the following code snippet::")?;
    writer.raw(&python_snippet(&plugin.category, &plugin.name, &table))?;

    Ok(())
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("{0}")]
    FileWrite(String),

    #[error("Unknown plugin: {0}")]
    InvalidPluginName(String),

    #[error("Failed to write documentation: {0}")]
    Io(#[from] io::Error),
}
