//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{init::InitArgs, monkey::MonkeyArgs, serve::ServeArgs};

#[derive(Parser, Debug)]
#[command(name = "monkeyhub")]
#[command(about = "Monkeyhub - shared monkey data service and client shell", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .monkeyhub/
    #[arg(short, long, global = true, env = "MONKEYHUB_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .monkeyhub/config.yaml in a project directory
    Init(InitArgs),

    /// Run the local monkey HTTP API
    Serve(ServeArgs),

    /// Browse the monkey collection
    Monkey(MonkeyArgs),

    /// Show connectivity and source information
    Status,
}
