//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the data directory and database.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Parser;
use std::path::PathBuf;
use streserve::database::default_data_dir;
use streserve::operations::init::{init_database, InitOptions, InitStep};

/// Initialize the data directory and database.
#[derive(Parser)]
#[command(about = "Initialize the streserve data directory and database")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` has no effect here. The command's own `--data-dir`
    /// names where to create, not where to look.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        if self.dry_run {
            print_plan(&options);
            return Ok(());
        }

        let result = init_database(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized streserve in: {}", result.data_dir.display());
        for step in &result.steps {
            match step {
                InitStep::CreateDataDir(_) => println!("  - Created data directory"),
                InitStep::RemoveDatabase(_) => {}
                InitStep::CreateDatabase(_) if result.database_replaced() => {
                    println!("  - Recreated database");
                }
                InitStep::CreateDatabase(_) => println!("  - Created database"),
                InitStep::WriteConfig(_) => println!("  - Created default configuration file"),
                InitStep::KeepConfig(_) => {
                    println!("  - Configuration file already exists (not overwritten)");
                }
            }
        }

        Ok(())
    }
}

fn print_plan(options: &InitOptions) {
    println!("Dry-run mode: no changes will be made");
    println!();
    println!("Would initialize streserve in: {}", options.data_dir.display());

    match options.steps() {
        Ok(steps) => {
            for step in steps {
                println!("  - {step}");
            }
        }
        Err(err) => println!("  - ERROR: {err}"),
    }
}
