//! Setting up a fresh data directory.
//!
//! [`InitOptions::steps`] decides what has to happen for a data directory
//! and [`init_database`] carries those steps out, so `init --dry-run` can
//! list exactly what a real run would do.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::USER_CONFIG_FILE;
use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

const DEFAULT_CONFIG_TEMPLATE: &str = r"# STReserve configuration

# Seconds to wait for the database write lock (default: 5)
# maximum_lock_wait_seconds: 5

# Render related records as paths (link) or nested objects (embed)
# link_style: link

# Output format for list commands: table, json, csv or tsv
# output_format: table

# Lowest accepted group code; can only be raised above 20180000
# min_group_code: 20180000
";

/// One filesystem change made by `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitStep {
    /// Create the data directory.
    CreateDataDir(PathBuf),
    /// Delete the existing database and its WAL side files.
    RemoveDatabase(PathBuf),
    /// Create an empty database with the current schema.
    CreateDatabase(PathBuf),
    /// Write the commented configuration template.
    WriteConfig(PathBuf),
    /// Leave an existing configuration file alone.
    KeepConfig(PathBuf),
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDataDir(path) => write!(f, "Create data directory: {}", path.display()),
            Self::RemoveDatabase(path) => {
                write!(f, "Remove existing database: {}", path.display())
            }
            Self::CreateDatabase(path) => write!(f, "Create database: {}", path.display()),
            Self::WriteConfig(path) => {
                write!(f, "Create configuration file: {}", path.display())
            }
            Self::KeepConfig(path) => write!(
                f,
                "Configuration file already exists (will not overwrite): {}",
                path.display()
            ),
        }
    }
}

/// What `init` should do to a data directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace a database that is already there, dropping all inventory.
    pub overwrite: bool,
    /// Also write `config.yaml` unless one exists.
    pub create_config: bool,
}

impl InitOptions {
    /// Targets `data_dir` without overwrite or config.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether an existing database is replaced.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether the configuration template is written.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Path of the database inside the data directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Lists the steps `init` would take, reading but never changing the
    /// filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] on field `database` if a database is
    /// already present and overwrite is off.
    pub fn steps(&self) -> Result<Vec<InitStep>> {
        let mut steps = Vec::new();
        if !self.data_dir.exists() {
            steps.push(InitStep::CreateDataDir(self.data_dir.clone()));
        }

        let db_path = self.database_path();
        if db_path.exists() {
            if !self.overwrite {
                return Err(Error::Validation {
                    field: "database".into(),
                    message: format!(
                        "Database already exists at {}. Use --overwrite to replace it.",
                        db_path.display()
                    ),
                });
            }
            steps.push(InitStep::RemoveDatabase(db_path.clone()));
        }
        steps.push(InitStep::CreateDatabase(db_path));

        if self.create_config {
            let config_path = self.data_dir.join(USER_CONFIG_FILE);
            steps.push(if config_path.exists() {
                InitStep::KeepConfig(config_path)
            } else {
                InitStep::WriteConfig(config_path)
            });
        }

        Ok(steps)
    }
}

/// Steps taken by a completed `init`.
#[derive(Debug)]
pub struct InitResult {
    /// The initialized data directory.
    pub data_dir: PathBuf,
    /// Every step applied, in order.
    pub steps: Vec<InitStep>,
}

impl InitResult {
    /// Whether the data directory had to be created.
    #[must_use]
    pub fn data_dir_created(&self) -> bool {
        self.has(|step| matches!(step, InitStep::CreateDataDir(_)))
    }

    /// Whether an earlier database was discarded.
    #[must_use]
    pub fn database_replaced(&self) -> bool {
        self.has(|step| matches!(step, InitStep::RemoveDatabase(_)))
    }

    /// Whether the configuration template was written.
    #[must_use]
    pub fn config_created(&self) -> bool {
        self.has(|step| matches!(step, InitStep::WriteConfig(_)))
    }

    fn has(&self, predicate: impl Fn(&InitStep) -> bool) -> bool {
        self.steps.iter().any(predicate)
    }
}

/// Creates an empty store in `options.data_dir`.
///
/// # Errors
///
/// Returns the error from [`InitOptions::steps`], or an I/O or database
/// error from applying a step. Steps already applied are not undone.
///
/// # Examples
///
/// ```no_run
/// use streserve::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/streserve-test"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("Config written: {}", result.config_created());
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let steps = options.steps()?;
    for step in &steps {
        apply(step)?;
    }
    log::info!("Initialized data directory {}", options.data_dir.display());

    Ok(InitResult {
        data_dir: options.data_dir.clone(),
        steps,
    })
}

fn apply(step: &InitStep) -> Result<()> {
    match step {
        InitStep::CreateDataDir(dir) => fs::create_dir_all(dir)?,
        InitStep::RemoveDatabase(path) => remove_database(path)?,
        InitStep::CreateDatabase(path) => {
            Database::open(DatabaseConfig::new(path))?;
        }
        InitStep::WriteConfig(path) => fs::write(path, DEFAULT_CONFIG_TEMPLATE)?,
        InitStep::KeepConfig(_) => {}
    }
    log::debug!("{step}");
    Ok(())
}

fn remove_database(path: &Path) -> Result<()> {
    fs::remove_file(path)?;
    for suffix in ["-wal", "-shm"] {
        let mut side = path.as_os_str().to_owned();
        side.push(suffix);
        let side = PathBuf::from(side);
        if side.exists() {
            fs::remove_file(side)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigLoader};
    use crate::inventory::{ChemicalState, NewChemical};
    use tempfile::TempDir;

    #[test]
    fn test_steps_for_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("streserve");

        let steps = InitOptions::new(data_dir.clone())
            .with_create_config(true)
            .steps()
            .unwrap();

        assert_eq!(
            steps,
            vec![
                InitStep::CreateDataDir(data_dir.clone()),
                InitStep::CreateDatabase(data_dir.join(DATABASE_FILE_NAME)),
                InitStep::WriteConfig(data_dir.join(USER_CONFIG_FILE)),
            ]
        );
        assert!(!data_dir.exists());
    }

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("streserve");

        let result = init_database(&InitOptions::new(data_dir.clone())).unwrap();

        assert!(result.data_dir_created());
        assert!(!result.database_replaced());
        assert!(!result.config_created());
        assert!(data_dir.join(DATABASE_FILE_NAME).exists());
    }

    #[test]
    fn test_init_existing_directory() {
        let temp = TempDir::new().unwrap();

        let result = init_database(&InitOptions::new(temp.path().to_path_buf())).unwrap();

        assert!(!result.data_dir_created());
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn test_init_with_config_template_parses() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("streserve");

        let options = InitOptions::new(data_dir.clone()).with_create_config(true);
        let result = init_database(&options).unwrap();

        assert!(result.config_created());
        let config = ConfigLoader::load_file(&data_dir.join(USER_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_fails_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("streserve");

        init_database(&InitOptions::new(data_dir.clone())).unwrap();
        let result = init_database(&InitOptions::new(data_dir));

        match result {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "database");
                assert!(message.contains("--overwrite"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_init_with_overwrite_clears_inventory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("streserve");

        init_database(&InitOptions::new(data_dir.clone())).unwrap();
        {
            let db = Database::open(DatabaseConfig::in_data_dir(&data_dir)).unwrap();
            Database::insert_chemical(
                db.connection(),
                &NewChemical::new("Ethanol", ChemicalState::Liquid, 500),
            )
            .unwrap();
        }

        let options = InitOptions::new(data_dir.clone()).with_overwrite(true);
        let result = init_database(&options).unwrap();
        assert!(result.database_replaced());

        let db = Database::open(DatabaseConfig::in_data_dir(&data_dir)).unwrap();
        assert!(Database::list_chemicals(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_init_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("streserve");
        fs::create_dir_all(&data_dir).unwrap();
        let config_path = data_dir.join(USER_CONFIG_FILE);
        fs::write(&config_path, "link_style: embed\n").unwrap();

        let options = InitOptions::new(data_dir).with_create_config(true);
        let result = init_database(&options).unwrap();

        assert!(!result.config_created());
        assert!(result.steps.contains(&InitStep::KeepConfig(config_path.clone())));
        assert_eq!(
            fs::read_to_string(&config_path).unwrap(),
            "link_style: embed\n"
        );
    }
}
