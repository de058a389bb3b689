use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{
    Category, Direction, ParameterDescriptor, PluginInfo, PluginRegistry,
    help::parameter_help_payload,
};
use crate::{PluginDocError, Result};

/// On-disk description of one or more plugins.
///
/// Manifests are TOML or JSON files found in plugin directories.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct PluginManifest {
    /// Plugins declared by this manifest.
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
}

/// A plugin declared in a manifest.
///
/// Keys not listed here (`author`, `date`, `release`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PluginEntry {
    /// Unique plugin name.
    pub name: String,
    /// Category label (e.g. "Layout", "Import").
    pub category: String,
    /// Plugin description, may contain presentational HTML.
    #[serde(default)]
    pub info: String,
    /// Group inside the category.
    #[serde(default)]
    pub group: Option<String>,
    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
}

/// A parameter declared in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ParameterEntry {
    /// Parameter name, may start with `file::` or `dir::`.
    pub name: String,
    /// Type id (`bool`, `int`, `double`, `string`, `LayoutProperty`, ...).
    #[serde(rename = "type")]
    pub type_id: String,
    /// `in`, `out` or `inout`. Defaults to `in`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Default value encoded as a string.
    #[serde(default)]
    pub default: String,
    /// Plain help text or a complete HTML help payload.
    #[serde(default)]
    pub help: String,
    /// Description of the allowed values.
    #[serde(default)]
    pub values: String,
}

impl PluginManifest {
    /// Reads a manifest, choosing the decoder from the file extension.
    ///
    /// # Errors
    /// Returns `PluginDocError::ManifestError` if the file cannot be read
    /// or decoded.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PluginDocError::manifest(e, path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| PluginDocError::manifest(e, path))
            }
            _ => toml::from_str(&content).map_err(|e| PluginDocError::manifest(e, path)),
        }
    }

    /// JSON Schema describing the manifest format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PluginManifest)
    }
}

/// Outcome of loading a plugin directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names of the newly registered plugins.
    pub loaded: Vec<String>,
    /// Names ignored because a plugin with the same name already exists.
    pub duplicates: Vec<String>,
    /// Manifests that could not be decoded, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

#[derive(Debug, Clone)]
struct RegisteredPlugin {
    info: PluginInfo,
    parameters: Vec<ParameterDescriptor>,
}

/// Plugin registry populated from manifest files.
#[derive(Debug, Default)]
pub struct ManifestRegistry {
    plugins: BTreeMap<String, RegisteredPlugin>,
}

impl ManifestRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from several plugin directories.
    ///
    /// Directories that cannot be scanned are logged and skipped.
    pub fn from_dirs<P: AsRef<Path>>(dirs: &[P]) -> Self {
        let mut registry = Self::new();

        for dir in dirs {
            let dir = dir.as_ref();
            if let Err(err) = registry.load_plugins_from_dir(dir) {
                warn!("Skipping plugin directory {}: {}", dir.display(), err);
            }
        }

        registry
    }

    /// Loads every manifest found below `dir`, recursively.
    ///
    /// Broken manifests are recorded in the report and do not stop the scan.
    ///
    /// # Errors
    /// Returns `PluginDocError::IoError` if `dir` cannot be read.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load_plugins_from_dir(&mut self, dir: &Path) -> Result<LoadReport> {
        let mut manifests = Vec::new();
        collect_manifests(dir, &mut manifests)?;

        let mut report = LoadReport::default();

        for path in manifests {
            match PluginManifest::from_path(&path) {
                Ok(manifest) => {
                    for entry in manifest.plugins {
                        let name = entry.name.clone();
                        if self.register(entry) {
                            report.loaded.push(name);
                        } else {
                            warn!("Plugin '{}' from {} is already registered", name, path.display());
                            report.duplicates.push(name);
                        }
                    }
                }
                Err(err) => {
                    warn!("Unable to load {}: {}", path.display(), err);
                    report.failures.push((path, err.to_string()));
                }
            }
        }

        info!("Loaded {} plugins", report.loaded.len());
        Ok(report)
    }

    /// Registers a plugin entry. Returns `false` if the name is taken.
    pub fn register(&mut self, entry: PluginEntry) -> bool {
        if self.plugins.contains_key(&entry.name) {
            return false;
        }

        let parameters = entry
            .parameters
            .iter()
            .map(|param| {
                let direction = param
                    .direction
                    .as_deref()
                    .map(Direction::parse)
                    .unwrap_or_default();

                ParameterDescriptor {
                    name: param.name.clone(),
                    direction,
                    default_value: param.default.clone(),
                    type_name: param.type_id.clone(),
                    help: parameter_help_payload(
                        &param.name,
                        &param.help,
                        &param.type_id,
                        &param.default,
                        &param.values,
                        direction,
                    ),
                }
            })
            .collect();

        let info = PluginInfo {
            name: entry.name.clone(),
            category: Category::parse(&entry.category),
            info: entry.info,
            group: entry.group,
        };

        debug!("Registered plugin '{}' ({})", info.name, info.category);
        self.plugins
            .insert(entry.name, RegisteredPlugin { info, parameters });
        true
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl PluginRegistry for ManifestRegistry {
    fn plugin_names(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    fn plugin_info(&self, name: &str) -> Option<&PluginInfo> {
        self.plugins.get(name).map(|plugin| &plugin.info)
    }

    fn plugin_parameters(&self, name: &str) -> Option<&[ParameterDescriptor]> {
        self.plugins
            .get(name)
            .map(|plugin| plugin.parameters.as_slice())
    }
}

fn collect_manifests(dir: &Path, manifests: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| PluginDocError::io(e, dir))?;

    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()
        .map_err(|e| PluginDocError::io(e, dir))?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_manifests(&path, manifests)?;
        } else if is_manifest(&path) {
            manifests.push(path);
        }
    }

    Ok(())
}

fn is_manifest(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("toml") | Some("json")
    )
}
