use std::io;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use marathon_client::adapter::inbound::cli::command::{Cli, Commands};
use marathon_client::adapter::inbound::cli::query;
use marathon_client::infrastructure::config::settings::Config;
use marathon_client::infrastructure::factory::build_marathon;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            std::process::exit(1);
        }
    };
    config.init_logging();

    if let Err(e) = run(&cli, &config).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Load the config file and apply command-line overrides.
///
/// Defaults apply when the default path is absent.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.as_path();
    let mut config = if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
        Config::parse_toml("").context("invalid default configuration")?
    } else {
        Config::load(path).with_context(|| format!("reading {}", path.display()))?
    };

    cli.apply_overrides(&mut config);
    config.validate().context("invalid command-line override")?;
    Ok(config)
}

async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let client = build_marathon(config);
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Apps => query::apps(client.as_ref(), &mut stdout).await,
        Commands::Tasks(args) => query::tasks(client.as_ref(), &args.app, &mut stdout).await,
    }
}
