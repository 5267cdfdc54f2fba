//! Integration tests for the configuration system.
//!
//! Covers file discovery, merging, environment overrides and validation
//! working together, and the effect of the result on reservations.
//!
//! Tests that modify environment variables are marked with `#[serial]`
//! because environment variables are process-global.

mod common;

use std::env;
use std::fs;
use std::path::Path;

use serial_test::serial;
use streserve::config::{Config, ConfigBuilder, OutputFormat};
use streserve::output::LinkStyle;
use streserve::{reserve_chemical, Error, ReserveChemicalRequest};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "STRESERVE_DISABLE_AUTOINIT",
    "STRESERVE_MAXIMUM_LOCK_WAIT_SECONDS",
    "STRESERVE_LINK_STYLE",
    "STRESERVE_OUTPUT_FORMAT",
    "STRESERVE_MIN_GROUP_CODE",
];

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_env() {
    for key in ENV_VARS {
        env::remove_var(key);
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn build(data_dir: &Path, work_dir: &Path) -> streserve::Result<Config> {
    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .with_working_dir(work_dir)
        .build()
}

#[test]
#[serial]
fn test_project_file_overrides_user_file() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(data_dir.path(), "config.yaml", "link_style: embed\noutput_format: csv\n");
    write(work_dir.path(), "streserve.yaml", "link_style: link\n");

    let config = build(data_dir.path(), work_dir.path()).unwrap();
    assert_eq!(config.link_style(), LinkStyle::Link);
    assert_eq!(config.output_format(), OutputFormat::Csv);
}

#[test]
#[serial]
fn test_local_file_beats_project_file() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "streserve.yaml", "maximum_lock_wait_seconds: 3\n");
    write(work_dir.path(), "streserve.local.yaml", "maximum_lock_wait_seconds: 11\n");

    let nested = work_dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = build(data_dir.path(), &nested).unwrap();
    assert_eq!(config.maximum_lock_wait_seconds, Some(11));
}

#[test]
#[serial]
fn test_environment_beats_files() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "streserve.yaml", "output_format: json\n");

    let _format = EnvGuard::new("STRESERVE_OUTPUT_FORMAT", "tsv");
    let _style = EnvGuard::new("STRESERVE_LINK_STYLE", "embed");

    let config = build(data_dir.path(), work_dir.path()).unwrap();
    assert_eq!(config.output_format(), OutputFormat::Tsv);
    assert_eq!(config.link_style(), LinkStyle::Embed);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_rejected() {
    clear_env();
    let _guard = EnvGuard::new("STRESERVE_MIN_GROUP_CODE", "twenty");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "STRESERVE_MIN_GROUP_CODE"));
}

#[test]
#[serial]
fn test_group_code_minimum_cannot_be_lowered() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "streserve.yaml", "min_group_code: 20000000\n");

    let err = build(data_dir.path(), work_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
#[serial]
fn test_project_file_cannot_disable_autoinit() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "streserve.yaml", "disable_autoinit: true\n");

    assert!(build(data_dir.path(), work_dir.path()).is_err());
}

#[test]
#[serial]
fn test_unknown_key_is_a_configuration_error() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "streserve.yaml", "port_range: 5000\n");

    let err = build(data_dir.path(), work_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
#[serial]
fn test_raised_minimum_applies_to_reservations() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "streserve.yaml", "min_group_code: 20190000\n");
    let config = build(data_dir.path(), work_dir.path()).unwrap();

    let mut db = common::create_test_database();
    let salt = common::seed_sodium_chloride(&db);
    let request = ReserveChemicalRequest::new(salt.id)
        .with_group_code(20_180_105)
        .with_qty(10)
        .with_date_procured("20180601");

    let err = reserve_chemical(&mut db, &request, &config, false).unwrap_err();
    assert!(matches!(
        err,
        Error::UnrecognizedGroupCode {
            code: 20_180_105,
            minimum: 20_190_000
        }
    ));

    let accepted = request.with_group_code(20_190_203);
    assert!(reserve_chemical(&mut db, &accepted, &config, false).is_ok());
}
