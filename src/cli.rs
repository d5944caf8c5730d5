//! Introspection commands over the endpoint catalog.
//!
//! ```bash
//! terminal-endpoints list --group permission
//! terminal-endpoints resolve SessionReplay
//! terminal-endpoints format UserPermsNodeAssetsList alice node-1 --absolute
//! terminal-endpoints --json group TokenAsset
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fmt;

use crate::catalog::EndpointCatalog;
use crate::config::Config;
use crate::endpoint::EndpointGroup;

/// Inspect the core API endpoint catalog
#[derive(Parser, Debug)]
#[command(name = "terminal-endpoints", version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered endpoints in registry order
    List {
        /// Only show endpoints of this group
        #[arg(short, long)]
        group: Option<EndpointGroup>,
    },
    /// Print the path template of an endpoint
    Resolve { id: String },
    /// Substitute values into an endpoint's placeholders
    Format {
        id: String,
        values: Vec<String>,
        /// Prefix the path with CORE_HOST
        #[arg(long)]
        absolute: bool,
    },
    /// Print the group of an endpoint
    Group { id: String },
}

/// Execute a command, returning what should be printed on stdout
pub fn run(cli: &Cli, catalog: &EndpointCatalog, config: &Config) -> Result<String> {
    let output = match &cli.command {
        Commands::List { group } => {
            let entries: Vec<_> = match group {
                Some(group) => catalog.by_group(*group).collect(),
                None => catalog.iter().collect(),
            };
            if cli.json {
                serde_json::to_string_pretty(&entries)?
            } else {
                entries
                    .iter()
                    .map(|entry| format!("{:<10} {:<30} {}", entry.group(), entry.id(), entry.path()))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Commands::Resolve { id } => {
            let template = catalog.resolve(id)?;
            if cli.json {
                json!({ "id": id, "template": template }).to_string()
            } else {
                template.to_string()
            }
        }
        Commands::Format { id, values, absolute } => {
            let values: Vec<&dyn fmt::Display> =
                values.iter().map(|value| value as &dyn fmt::Display).collect();
            let path = catalog.format(id, &values)?;
            let path = if *absolute { config.url_for(&path) } else { path };
            if cli.json {
                json!({ "id": id, "path": path }).to_string()
            } else {
                path
            }
        }
        Commands::Group { id } => {
            let group = catalog.group_of(id)?;
            if cli.json {
                json!({ "id": id, "group": group }).to_string()
            } else {
                group.to_string()
            }
        }
    };

    Ok(output)
}
