//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ImportCommand, InitCommand, ListCommand, RequestCommand,
    ReserveChemicalCommand, ReserveEquipmentCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for laboratory chemical and equipment reservations.
#[derive(Parser)]
#[command(name = "streserve")]
#[command(
    version,
    about = "Reserve laboratory chemicals and equipment",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "STRESERVE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "STRESERVE_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "STRESERVE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Import chemicals or equipment from a CSV file
    Import(ImportCommand),

    /// List chemicals, equipment or their logs
    List(ListCommand),

    /// Show a single record as JSON
    Show(ShowCommand),

    /// Reserve a quantity of a chemical
    ReserveChemical(ReserveChemicalCommand),

    /// Reserve a quantity of equipment
    ReserveEquipment(ReserveEquipmentCommand),

    /// Send a path and parameters through the request router
    Request(RequestCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
