//! Unit tests for the plugin registry.
//!
//! Manifests are written to temporary directories.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::registry::{Category, Direction, ManifestRegistry, PluginManifest, PluginRegistry};

const GRID_MANIFEST: &str = r#"
[[plugins]]
name = "Grid"
category = "Import"
info = "Imports a grid-shaped graph."

[[plugins.parameters]]
name = "width"
type = "unsigned int"
default = "10"
help = "Grid node width."

[[plugins.parameters]]
name = "height"
type = "unsigned int"
default = "10"
direction = "in"
"#;

const BUNDLING_MANIFEST: &str = r#"{
  "plugins": [
    {
      "name": "Edge bundling",
      "category": "Algorithm",
      "parameters": [
        { "name": "layout", "type": "LayoutProperty", "default": "viewLayout" },
        { "name": "3D_layout", "type": "bool", "default": "false", "direction": "inout" }
      ]
    }
  ]
}"#;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn category_labels_roundtrip() {
    for category in Category::KNOWN {
        assert_eq!(Category::parse(category.label()), category);
    }
    assert_eq!(Category::parse("Node shape"), Category::NodeShape);
    assert_eq!(
        Category::parse("Clustering"),
        Category::Other("Clustering".to_string())
    );
}

#[test]
fn categories_sort_by_label() {
    let mut categories = vec![
        Category::Selection,
        Category::Other("Clustering".to_string()),
        Category::Algorithm,
        Category::EdgeExtremity,
    ];
    categories.sort();

    let labels: Vec<&str> = categories.iter().map(Category::label).collect();
    assert_eq!(labels, ["Algorithm", "Clustering", "Edge extremity", "Selection"]);
}

#[test]
fn ui_categories_are_flagged() {
    assert!(Category::Panel.is_ui_only());
    assert!(Category::Interactor.is_ui_only());
    assert!(!Category::Layout.is_ui_only());
    assert!(!Category::Other("Panel shape".to_string()).is_ui_only());
}

#[test]
fn direction_markers() {
    assert_eq!(Direction::parse("in"), Direction::In);
    assert_eq!(Direction::parse("OUTPUT"), Direction::Out);
    assert_eq!(Direction::parse("inout"), Direction::InOut);
    assert_eq!(Direction::parse("sideways"), Direction::InOut);

    assert!(Direction::In.counts_as_input());
    assert!(Direction::InOut.counts_as_input());
    assert!(!Direction::Out.counts_as_input());
    assert_eq!(Direction::InOut.label(), "input / output");
}

#[test]
fn loads_toml_and_json_manifests_recursively() {
    let dir = TempDir::new().unwrap();
    write(&dir, "import/grid.toml", GRID_MANIFEST);
    write(&dir, "general/nested/bundling.json", BUNDLING_MANIFEST);
    write(&dir, "README.txt", "not a manifest");

    let mut registry = ManifestRegistry::new();
    let report = registry.load_plugins_from_dir(dir.path()).unwrap();

    assert_eq!(report.loaded, ["Edge bundling", "Grid"]);
    assert!(report.failures.is_empty());
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.plugin_names(), ["Edge bundling", "Grid"]);

    let grid = registry.plugin_info("Grid").unwrap();
    assert_eq!(grid.category, Category::Import);
    assert_eq!(grid.info, "Imports a grid-shaped graph.");
}

#[test]
fn parameters_carry_synthesized_help_payload() {
    let dir = TempDir::new().unwrap();
    write(&dir, "grid.toml", GRID_MANIFEST);

    let mut registry = ManifestRegistry::new();
    registry.load_plugins_from_dir(dir.path()).unwrap();

    let params = registry.plugin_parameters("Grid").unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "width");
    assert_eq!(params[0].direction, Direction::In);
    assert_eq!(params[0].default_value, "10");
    assert!(
        params[0]
            .help
            .contains("<b>type</b><td class=\"b\">unsigned integer</td>")
    );
    assert!(params[0].help.contains("<p class=\"help\">Grid node width.</p>"));
    assert!(!params[1].help.contains("<p class=\"help\">"));
}

#[test]
fn broken_manifest_is_reported_and_skipped() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a_broken.toml", "[[plugins]\nname = ");
    write(&dir, "b_grid.toml", GRID_MANIFEST);

    let mut registry = ManifestRegistry::new();
    let report = registry.load_plugins_from_dir(dir.path()).unwrap();

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("a_broken.toml"));
    assert_eq!(report.loaded, ["Grid"]);
}

#[test]
fn first_registration_wins() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.toml", GRID_MANIFEST);
    write(
        &dir,
        "b.toml",
        "[[plugins]]\nname = \"Grid\"\ncategory = \"Layout\"\n",
    );

    let mut registry = ManifestRegistry::new();
    let report = registry.load_plugins_from_dir(dir.path()).unwrap();

    assert_eq!(report.duplicates, ["Grid"]);
    assert_eq!(
        registry.plugin_info("Grid").unwrap().category,
        Category::Import
    );
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut registry = ManifestRegistry::new();

    assert!(
        registry
            .load_plugins_from_dir(&dir.path().join("missing"))
            .is_err()
    );
}

#[test]
fn from_dirs_skips_unreadable_directories() {
    let dir = TempDir::new().unwrap();
    write(&dir, "general/bundling.json", BUNDLING_MANIFEST);

    let registry =
        ManifestRegistry::from_dirs(&[dir.path().join("missing"), dir.path().join("general")]);

    assert_eq!(registry.plugin_names(), ["Edge bundling"]);
}

#[test]
fn plugins_in_category_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    write(&dir, "grid.toml", GRID_MANIFEST);
    write(&dir, "bundling.json", BUNDLING_MANIFEST);

    let mut registry = ManifestRegistry::new();
    registry.load_plugins_from_dir(dir.path()).unwrap();

    assert_eq!(
        registry.plugins_in_category(&Category::Algorithm),
        ["Edge bundling"]
    );
    assert!(registry.plugins_in_category(&Category::Layout).is_empty());
}

#[test]
fn listing_label_shows_group() {
    let dir = TempDir::new().unwrap();
    write(&dir, "grid.toml", GRID_MANIFEST);
    write(
        &dir,
        "circular.toml",
        "[[plugins]]\nname = \"Circular\"\ncategory = \"Layout\"\ngroup = \"Basic\"\n\
         author = \"Someone\"\nrelease = \"1.4\"\n",
    );

    let mut registry = ManifestRegistry::new();
    let report = registry.load_plugins_from_dir(dir.path()).unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(
        registry.plugin_info("Circular").unwrap().listing_label(),
        "Circular (Basic)"
    );
    assert_eq!(registry.plugin_info("Grid").unwrap().listing_label(), "Grid");
}

#[test]
fn manifest_schema_describes_plugins() {
    let schema = serde_json::to_value(PluginManifest::json_schema()).unwrap();
    let text = schema.to_string();

    assert!(text.contains("plugins"));
    assert!(text.contains("PluginEntry"));
}
