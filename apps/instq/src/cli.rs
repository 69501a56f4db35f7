//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// instq - batch package installer with a notification surface
#[derive(Parser)]
#[command(name = "instq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Batch package installer with a notification surface")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Install package files in submission order
    #[command(alias = "i")]
    Install {
        /// Package files to install
        files: Vec<String>,

        /// Batch display title
        #[arg(long, default_value = "Package installs")]
        title: String,

        /// Installer command to run per file (overrides the config file)
        #[arg(long)]
        installer: Option<String>,
    },
}
