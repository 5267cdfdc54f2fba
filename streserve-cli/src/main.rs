//! Main entry point for the streserve CLI.
//!
//! This is the command-line interface for the lab reservation store.
//! It provides commands for managing inventory and reservations:
//! - `init`: Create the data directory and database
//! - `import`: Load chemicals or equipment from CSV
//! - `list` / `show`: Inspect inventory and logs
//! - `reserve-chemical` / `reserve-equipment`: Reserve stock for a group
//! - `request`: Drive the request router directly

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = streserve::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Import(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::ReserveChemical(cmd) => cmd.execute(&global),
        cli::Command::ReserveEquipment(cmd) => cmd.execute(&global),
        cli::Command::Request(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
