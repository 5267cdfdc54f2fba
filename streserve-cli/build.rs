//! Build script for streserve-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("streserve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reserve laboratory chemicals and equipment")
        .long_about(
            "Command-line tool for reserving laboratory chemicals and equipment for student groups",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("STRESERVE_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("STRESERVE_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("STRESERVE_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the streserve data directory, database and optional configuration file"),
            Command::new("import")
                .about("Import chemicals or equipment from a CSV file")
                .long_about("Load inventory rows from a CSV file with a header row in one transaction"),
            Command::new("list")
                .about("List chemicals, equipment or their logs")
                .long_about("Display inventory or reservation logs as a table, JSON, CSV or TSV"),
            Command::new("show")
                .about("Show a single record as JSON")
                .long_about("Display one chemical, piece of equipment or log with its related records"),
            Command::new("reserve-chemical")
                .about("Reserve a quantity of a chemical")
                .long_about("Reserve stock of a chemical for a group on a procurement date"),
            Command::new("reserve-equipment")
                .about("Reserve a quantity of equipment")
                .long_about("Reserve equipment for a group between a procurement and a return date"),
            Command::new("request")
                .about("Send a path and parameters through the request router")
                .long_about("Route a request path with flat string parameters and print the response body"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("streserve.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
