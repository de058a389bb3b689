use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use super::{ConfigPaths, DocgenConfig};
use crate::{PluginDocError, Result};

/// Build tree holding the compiled plugins.
pub const BUILD_DIR_ENV: &str = "TALIPOT_BUILD_DIR";
/// Directory of the Python plugins bundled with the bindings.
pub const PYTHON_PLUGINS_DIR_ENV: &str = "TALIPOT_PYTHON_PLUGINS_DIR";
/// Directory of the Python plugins bundled with the GUI bindings.
pub const GUI_PYTHON_PLUGINS_DIR_ENV: &str = "TalipotGUI_PYTHON_PLUGINS_DIR";
/// Uppercase spelling of [`GUI_PYTHON_PLUGINS_DIR_ENV`], read when the
/// canonical name is unset.
pub const GUI_PYTHON_PLUGINS_DIR_ENV_ALIAS: &str = "TALIPOTGUI_PYTHON_PLUGINS_DIR";

impl DocgenConfig {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// names an invalid plugin subdirectory.
    pub fn load(path: &Path) -> Result<DocgenConfig> {
        let content = fs::read_to_string(path).map_err(|e| PluginDocError::io(e, path))?;

        let config: DocgenConfig =
            toml::from_str(&content).map_err(|e| PluginDocError::toml_parse(e, Some(path)))?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, the default configuration
    /// file is used when present and built-in defaults otherwise. Environment
    /// overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be loaded.
    pub fn resolve(path: Option<&Path>) -> Result<DocgenConfig> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match ConfigPaths::main_config() {
                Ok(default_path) if default_path.is_file() => Self::load(&default_path)?,
                _ => {
                    info!("No configuration file found, using defaults");
                    DocgenConfig::default()
                }
            },
        };

        config.apply_env();
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| env::var(name).ok());
    }

    /// Applies overrides read through `lookup`.
    ///
    /// The build directory replaces the configured one. Python plugin
    /// directories are appended to the extra directories. The GUI directory
    /// is also read from its uppercase alias. Empty values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(build_dir) = lookup(BUILD_DIR_ENV) {
            debug!("{} overrides build directory: {}", BUILD_DIR_ENV, build_dir);
            self.build_dir = Some(PathBuf::from(build_dir));
        }

        let python_dirs = [
            (PYTHON_PLUGINS_DIR_ENV, lookup(PYTHON_PLUGINS_DIR_ENV)),
            (
                GUI_PYTHON_PLUGINS_DIR_ENV,
                lookup(GUI_PYTHON_PLUGINS_DIR_ENV)
                    .or_else(|| lookup(GUI_PYTHON_PLUGINS_DIR_ENV_ALIAS)),
            ),
        ];

        for (name, dir) in python_dirs
            .into_iter()
            .filter_map(|(name, dir)| dir.map(|dir| (name, dir)))
        {
            debug!("{} adds plugin directory: {}", name, dir);
            self.extra_plugin_dirs.push(PathBuf::from(dir));
        }
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `PluginDocError::ConfigValidation` if a plugin subdirectory is
    /// empty or absolute.
    pub fn validate(&self) -> Result<()> {
        for sub in &self.plugin_subdirs {
            if sub.trim().is_empty() || Path::new(sub).is_absolute() {
                return Err(PluginDocError::ConfigValidation {
                    component: "plugin_subdirs".to_string(),
                    details: format!(
                        "'{sub}' must be a non-empty path relative to <build_dir>/plugins"
                    ),
                });
            }
        }

        Ok(())
    }
}
