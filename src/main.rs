use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use hostprep::domain::models::NodeIdentity;
use hostprep::utils;
use hostprep::{Config, ConfigRewriteChain, LocalHostResolver, NetworkProvider, RewriterRegistry, SystemNetwork};

#[derive(Parser)]
#[command(name = "hostprep")]
#[command(about = "Resolves this node's advertised address and prepares its startup config.")]
struct Cli {
    /// Flat JSON object of configuration keys and values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the rewriters listed under job.config.rewriters
    #[arg(long)]
    no_rewrite: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Preparing node identity...");

    let registry = RewriterRegistry::with_builtins();
    let config = load_config(cli.config.as_deref())?;
    if config.is_empty() {
        log::warn!("Starting from an empty configuration");
    } else {
        log::info!("Loaded {} configuration entries", config.len());
    }
    let config = if cli.no_rewrite {
        config
    } else {
        ConfigRewriteChain::new(&registry)
            .rewrite_all(&config)
            .context("Failed to rewrite configuration")?
    };

    let address = resolve_address(SystemNetwork)?;
    let identity = NodeIdentity {
        hostname: utils::get_hostname(),
        address,
        framework_version: utils::framework_version(),
        task_class_version: utils::task_class_version(&config, &registry),
        config,
    };

    log::info!("Node identity ready - advertising {}", identity.address);
    println!("{}", serde_json::to_string_pretty(&identity)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn resolve_address<P: NetworkProvider>(provider: P) -> Result<IpAddr> {
    LocalHostResolver::new(provider)
        .resolve()
        .context("Failed to resolve local host")
}
