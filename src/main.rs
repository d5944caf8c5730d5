use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use terminal_endpoints::cli::{self, Cli};
use terminal_endpoints::config::Config;
use terminal_endpoints::EndpointCatalog;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    config.log_startup();

    let catalog = EndpointCatalog::builtin().context("failed to build endpoint catalog")?;

    let output = cli::run(&cli, &catalog, &config)?;
    println!("{}", output);

    Ok(())
}
