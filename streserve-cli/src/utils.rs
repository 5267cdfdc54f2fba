//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, database
//! management and delimited output.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CliError;
use streserve::database::{resolve_data_dir, DATABASE_FILE_NAME};
use streserve::{Config, ConfigBuilder, Database, DatabaseConfig};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory from global options.
///
/// Priority: `--data-dir` > `STRESERVE_DATA_DIR` > `~/.streserve`.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `streserve.local.yaml` and `streserve.yaml` found from the working directory
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = data_dir(global)?.join(DATABASE_FILE_NAME);

    let autoinit = !(global.disable_autoinit || config.autoinit_disabled());
    if !autoinit && !db_path.exists() {
        return Err(CliError::NoDataDirectory);
    }

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |seconds| Duration::from_secs(seconds.into()));

    let mut db_config = DatabaseConfig::new(db_path).with_busy_timeout(timeout);
    if !autoinit {
        db_config = db_config.without_auto_create();
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Write a header and rows as CSV or TSV to stdout.
pub fn write_delimited(headers: &[&str], rows: &[Vec<String>], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    writer.flush()?;

    Ok(())
}

/// Write a header and rows as a tab-separated table with uppercase headers.
pub fn write_table(headers: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        writeln!(handle, "{}", row.join("\t"))?;
    }

    Ok(())
}

/// Pretty-print a serializable value as JSON to stdout.
pub fn write_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(data_dir: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir,
            busy_timeout: None,
            disable_autoinit: false,
        }
    }

    #[test]
    fn test_data_dir_prefers_flag() {
        let dir = PathBuf::from("/tmp/streserve-flag");
        assert_eq!(data_dir(&global(Some(dir.clone()))).unwrap(), dir);
    }

    #[test]
    fn test_open_database_respects_disable_autoinit() {
        let temp = tempfile::tempdir().unwrap();
        let mut options = global(Some(temp.path().join("missing")));
        options.disable_autoinit = true;

        let err = open_database(&options, &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::NoDataDirectory));
    }

    #[test]
    fn test_open_database_creates_by_default() {
        let temp = tempfile::tempdir().unwrap();
        let options = global(Some(temp.path().join("data")));

        open_database(&options, &Config::default()).unwrap();
        assert!(temp.path().join("data").join(DATABASE_FILE_NAME).exists());
    }
}
