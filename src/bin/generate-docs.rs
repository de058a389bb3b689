//! Command line front end of the plugin documentation generator.
use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use plugindoc::{
    config::DocgenConfig,
    docs::DocsGenerator,
    registry::{Category, ManifestRegistry, PluginManifest, PluginRegistry},
    tracing_config,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate reStructuredText documentation for plugins")]
struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/plugindoc/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Document every loaded plugin
    All {
        /// Output file, overrides the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the section of a single plugin
    Plugin {
        name: String,
        /// Output file, standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the documented plugins
    List {
        /// Only list plugins of this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the JSON Schema of plugin manifests
    ManifestSchema,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::ManifestSchema = cli.command {
        println!("{}", serde_json::to_string_pretty(&PluginManifest::json_schema())?);
        return Ok(());
    }

    let config = DocgenConfig::resolve(cli.config.as_deref())?;
    tracing_config::init(config.general.log_level)?;

    let registry = ManifestRegistry::from_dirs(&config.plugin_dirs());
    info!("Loaded {} plugins", registry.len());

    match cli.command {
        Commands::All { output } => {
            let generator =
                DocsGenerator::new().with_output(output.unwrap_or_else(|| config.output.clone()));
            generator.generate_all(&registry)?;
        }
        Commands::Plugin { name, output } => {
            let section = DocsGenerator::new().generate_plugin(&registry, &name)?;
            match output {
                Some(path) => fs::write(&path, section)?,
                None => print!("{section}"),
            }
        }
        Commands::List { category } => {
            let names = match category {
                Some(label) => registry.plugins_in_category(&Category::parse(&label)),
                None => DocsGenerator::new().list_plugins(&registry),
            };
            println!("Available plugins:");
            for info in names.iter().filter_map(|name| registry.plugin_info(name)) {
                println!("  - {}", info.listing_label());
            }
        }
        Commands::ManifestSchema => {}
    }

    Ok(())
}
