//! Unit tests for config module
//!
//! Tests configuration defaults, TOML decoding, environment overrides and
//! plugin directory resolution.

#![allow(clippy::panic)]

use std::{collections::HashMap, path::PathBuf};

use crate::{
    PluginDocError,
    config::{ConfigPaths, DEFAULT_PLUGIN_SUBDIRS, DocgenConfig, LogLevel},
};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn config_default() {
    let config = DocgenConfig::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.build_dir, None);
    assert_eq!(config.plugin_subdirs.len(), DEFAULT_PLUGIN_SUBDIRS.len());
    assert!(config.extra_plugin_dirs.is_empty());
    assert_eq!(config.output, PathBuf::from("talipotpluginsdocumentation.rst"));
}

#[test]
fn config_empty_toml() {
    let config: DocgenConfig = toml::from_str("").unwrap();

    assert_eq!(config, DocgenConfig::default());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        build_dir = "/opt/talipot/build"
        plugin_subdirs = ["layout", "metric"]
        extra_plugin_dirs = ["/usr/share/plugins"]
        output = "doc/plugins.rst"

        [general]
        log_level = "debug"
    "#;

    let config: DocgenConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.build_dir, Some(PathBuf::from("/opt/talipot/build")));
    assert_eq!(config.plugin_subdirs, ["layout", "metric"]);
    assert_eq!(config.output, PathBuf::from("doc/plugins.rst"));
}

#[test]
fn config_rejects_unknown_log_level() {
    let result: Result<DocgenConfig, _> = toml::from_str("[general]\nlog_level = \"loud\"");
    assert!(result.is_err());
}

#[test]
fn config_serialize_roundtrip() {
    let original = DocgenConfig {
        build_dir: Some(PathBuf::from("build")),
        ..DocgenConfig::default()
    };

    let toml_str = toml::to_string(&original).unwrap();
    assert!(toml_str.contains("[general]"));

    let deserialized: DocgenConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(original, deserialized);
}

#[test]
fn plugin_dirs_follow_build_tree_layout() {
    let config = DocgenConfig {
        build_dir: Some(PathBuf::from("/build")),
        plugin_subdirs: vec!["layout".to_string(), "import".to_string()],
        extra_plugin_dirs: vec![PathBuf::from("/python")],
        ..DocgenConfig::default()
    };

    assert_eq!(
        config.plugin_dirs(),
        [
            PathBuf::from("/build/plugins/layout"),
            PathBuf::from("/build/plugins/import"),
            PathBuf::from("/python"),
        ]
    );
}

#[test]
fn plugin_dirs_without_build_dir() {
    let config = DocgenConfig {
        extra_plugin_dirs: vec![PathBuf::from("/python")],
        ..DocgenConfig::default()
    };

    assert_eq!(config.plugin_dirs(), [PathBuf::from("/python")]);
}

#[test]
fn default_plugin_dirs_cover_every_subdir() {
    let mut config = DocgenConfig::default();
    config.apply_env_from(env_of(&[("TALIPOT_BUILD_DIR", "/b")]));

    let dirs = config.plugin_dirs();
    assert_eq!(dirs.len(), 11);
    assert_eq!(dirs[0], PathBuf::from("/b/plugins/clustering"));
    assert_eq!(dirs[10], PathBuf::from("/b/plugins/test"));
}

#[test]
fn env_overrides_build_dir_and_appends_python_dirs() {
    let mut config = DocgenConfig {
        build_dir: Some(PathBuf::from("/configured")),
        extra_plugin_dirs: vec![PathBuf::from("/extra")],
        ..DocgenConfig::default()
    };

    config.apply_env_from(env_of(&[
        ("TALIPOT_BUILD_DIR", "/from/env"),
        ("TALIPOT_PYTHON_PLUGINS_DIR", "/py"),
        ("TalipotGUI_PYTHON_PLUGINS_DIR", "/pygui"),
    ]));

    assert_eq!(config.build_dir, Some(PathBuf::from("/from/env")));
    assert_eq!(
        config.extra_plugin_dirs,
        [
            PathBuf::from("/extra"),
            PathBuf::from("/py"),
            PathBuf::from("/pygui")
        ]
    );
}

#[test]
fn gui_python_dir_uses_mixed_case_name() {
    let mut config = DocgenConfig::default();
    config.apply_env_from(env_of(&[("TalipotGUI_PYTHON_PLUGINS_DIR", "/pygui")]));

    assert_eq!(config.extra_plugin_dirs, [PathBuf::from("/pygui")]);
}

#[test]
fn gui_python_dir_accepts_uppercase_alias() {
    let mut config = DocgenConfig::default();
    config.apply_env_from(env_of(&[("TALIPOTGUI_PYTHON_PLUGINS_DIR", "/upper")]));

    assert_eq!(config.extra_plugin_dirs, [PathBuf::from("/upper")]);
}

#[test]
fn gui_python_dir_prefers_mixed_case_name() {
    let mut config = DocgenConfig::default();
    config.apply_env_from(env_of(&[
        ("TalipotGUI_PYTHON_PLUGINS_DIR", "/mixed"),
        ("TALIPOTGUI_PYTHON_PLUGINS_DIR", "/upper"),
    ]));

    assert_eq!(config.extra_plugin_dirs, [PathBuf::from("/mixed")]);
}

#[test]
fn empty_env_values_are_ignored() {
    let mut config = DocgenConfig::default();
    config.apply_env_from(env_of(&[
        ("TALIPOT_BUILD_DIR", ""),
        ("TALIPOT_PYTHON_PLUGINS_DIR", ""),
    ]));

    assert_eq!(config, DocgenConfig::default());
}

#[test]
fn absolute_subdir_is_rejected() {
    let config = DocgenConfig {
        plugin_subdirs: vec!["/etc".to_string()],
        ..DocgenConfig::default()
    };

    match config.validate() {
        Err(PluginDocError::ConfigValidation { component, .. }) => {
            assert_eq!(component, "plugin_subdirs");
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DocgenConfig::load(&dir.path().join("missing.toml"));

    assert!(matches!(result, Err(PluginDocError::IoError { .. })));
}

#[test]
fn load_reports_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "build_dir = [").unwrap();

    match DocgenConfig::load(&path) {
        Err(PluginDocError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "output = \"out.rst\"\n").unwrap();

    let config = DocgenConfig::resolve(Some(&path)).unwrap();
    assert_eq!(config.output, PathBuf::from("out.rst"));
}

#[test]
fn config_paths_valid() {
    if std::env::var("HOME").is_ok() || std::env::var("XDG_CONFIG_HOME").is_ok() {
        let main_path = ConfigPaths::main_config().unwrap();

        assert!(main_path.ends_with("plugindoc/config.toml"));
        assert_eq!(main_path.parent(), ConfigPaths::config_dir().ok().as_deref());
    }
}
