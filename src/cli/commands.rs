//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gestate")]
#[command(about = "Pregnancy due date and milestone calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Anchor date (e.g., 2025-01-01)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// What DATE is: lmp (last menstrual period) or due (known due date)
    #[arg(short, long)]
    pub method: Option<String>,

    /// Calculate as of this date instead of today
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Print the shareable summary
    #[arg(long, conflicts_with = "json")]
    pub share: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (default: $GESTATE_CONFIG or ./gestate.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
