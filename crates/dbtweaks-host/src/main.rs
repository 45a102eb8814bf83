use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dbtweaks_host::config::HostConfig;
use dbtweaks_host::Startup;
use dbtweaks_patcher::profiles;

#[derive(Parser, Debug)]
#[command(
    name = "dbtweaks-host",
    about = "Load a game database, run post-load tweak modules once, and write the patched tables"
)]
struct Cli {
    /// Path to host configuration file
    #[arg(short, long, default_value = "config/dbtweaks.toml")]
    config: String,

    /// Run the modules and log the outcome without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the built-in module names and exit
    #[arg(long)]
    list_mods: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_mods {
        for name in profiles::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config_str = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("Failed to read config: {}", cli.config))?;
    let config: HostConfig =
        toml::from_str(&config_str).with_context(|| "Failed to parse host config")?;

    let reports = Startup::new(config)
        .run(cli.dry_run)
        .context("Host startup aborted")?;

    let written: usize = reports.iter().map(|r| r.total_written()).sum();
    tracing::info!(modules = reports.len(), written, "Done");

    Ok(())
}
