//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, paths};
use crate::filter::NodeFilter;
use crate::render::{self, OutputFormat, RootEntry};
use crate::selection::selected_leaf;
use crate::session::{FileSnapshotSource, SessionSettings, TopologyStore};

/// Snapshot inspection commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the categorized navigation tree
    Tree {
        /// Snapshot file (JSON or YAML)
        snapshot: PathBuf,
        /// Status tab to show (All, healthy, degraded, progressing, missing)
        #[arg(long)]
        status: Option<String>,
        /// Name search; terms shorter than filter.minSearchLength are ignored
        #[arg(long)]
        search: Option<String>,
        /// Click a node, given as its slash-separated path (e.g. "Workloads/Pod/web")
        #[arg(long = "select", value_name = "PATH")]
        select: Vec<String>,
        /// Expand every branch instead of following the selection
        #[arg(long)]
        expand_all: bool,
    },
    /// List pod root controllers with rolled-up pod status
    Roots {
        snapshot: PathBuf,
    },
    /// Print ownership trees for every resource of one kind
    Kind {
        snapshot: PathBuf,
        /// Kind name, case-insensitive (e.g. StatefulSet)
        kind: String,
    },
    /// List the pods below a root controller
    Pods {
        snapshot: PathBuf,
        /// Root controller name
        root: String,
    },
    /// Count resources per status
    Summary {
        snapshot: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "topology.maxDepth", "output.format")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "topology.maxDepth", "output.format")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

fn open_store(snapshot: &Path, config: &Config) -> Result<TopologyStore> {
    let store = TopologyStore::with_settings(SessionSettings::from(config));
    let count = store
        .refresh_from(&FileSnapshotSource::new(snapshot))
        .with_context(|| format!("Failed to load snapshot: {}", snapshot.display()))?;
    tracing::debug!("Loaded {} nodes from {}", count, snapshot.display());
    Ok(store)
}

/// Run a snapshot command and return what should be printed
pub fn execute(command: &Command, config: &Config, output: OutputFormat) -> Result<String> {
    match command {
        Command::Tree {
            snapshot,
            status,
            search,
            select,
            expand_all,
        } => {
            let store = open_store(snapshot, config)?;
            let status = status
                .as_deref()
                .unwrap_or(config.filter.default_status.as_str());
            store.set_filter(NodeFilter::new(status, search.as_deref().unwrap_or_default()));

            for path in select {
                let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
                if let Some((clicked, ancestors)) = segments.split_last() {
                    store.click(clicked, ancestors);
                }
            }

            let forest = store.forest();
            match output {
                OutputFormat::Text if *expand_all => Ok(render::render_tree(&forest, None)),
                OutputFormat::Text => {
                    let selection = store.selection();
                    Ok(render::render_tree(&forest, Some(&selection)))
                }
                _ => {
                    let selection = store.selection();
                    let view = TreeView {
                        selected: selected_leaf(&selection, &forest)
                            .map(|path| path.join("/")),
                        selection: &selection,
                        forest: &forest,
                    };
                    render::structured(&view, output)
                }
            }
        }
        Command::Roots { snapshot } => {
            let roots = open_store(snapshot, config)?.roots();
            match output {
                OutputFormat::Text => Ok(render::render_roots(&roots)),
                _ => {
                    let entries: Vec<RootEntry> = roots.iter().map(RootEntry::from).collect();
                    render::structured(&entries, output)
                }
            }
        }
        Command::Kind { snapshot, kind } => {
            let forest = open_store(snapshot, config)?.kind_view(kind);
            if forest.is_empty() {
                tracing::warn!("No resources of kind {} in snapshot", kind);
            }
            match output {
                OutputFormat::Text => Ok(render::render_tree(&forest, None)),
                _ => render::structured(&forest, output),
            }
        }
        Command::Pods { snapshot, root } => {
            let pods = open_store(snapshot, config)?.pods_for_root(root);
            match output {
                OutputFormat::Text => Ok(render::render_nodes(&pods)),
                _ => render::structured(&pods, output),
            }
        }
        Command::Summary { snapshot } => {
            let summary = open_store(snapshot, config)?.summary();
            match output {
                OutputFormat::Text => Ok(render::render_summary(&summary)),
                _ => render::structured(&summary, output),
            }
        }
        Command::Config { .. } | Command::Version => Err(anyhow::anyhow!(
            "{:?} is not a snapshot command",
            command
        )),
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeView<'a> {
    selected: Option<String>,
    selection: &'a crate::selection::SelectionState,
    forest: &'a [crate::models::TopologyNode],
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = crate::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Only the file layer is saved, never env overrides
            let path = paths::root_config_path();
            let mut config = if path.exists() {
                ConfigLoader::load_file(&path)?
            } else {
                ConfigLoader::load_defaults()
            };

            crate::config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
