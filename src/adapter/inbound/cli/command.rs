//! Command-line interface definitions.
//!
//! Defines the CLI structure for the marathon-client binary using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infrastructure::config::settings::Config;

/// Query a Marathon cluster for applications and tasks
#[derive(Parser, Debug)]
#[command(name = "marathon-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults apply when the default path is missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Marathon host authority, e.g. marathon.mesos:8080
    #[arg(long, global = true)]
    pub location: Option<String>,

    /// URL scheme [http, https]
    #[arg(long, global = true)]
    pub protocol: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub no_verify_ssl: bool,

    /// Log level override (e.g. debug, info)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all applications
    Apps,

    /// List the running tasks of an application
    Tasks(TasksArgs),
}

#[derive(clap::Args, Debug)]
pub struct TasksArgs {
    /// Application id, e.g. /myapp
    pub app: String,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(location) = &self.location {
            config.marathon.location.clone_from(location);
        }
        if let Some(protocol) = &self.protocol {
            config.marathon.protocol.clone_from(protocol);
        }
        if self.no_verify_ssl {
            config.marathon.no_verify_ssl = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = "json".into();
        }
    }
}
