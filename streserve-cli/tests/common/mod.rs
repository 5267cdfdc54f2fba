//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Seed data written through `streserve import`

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Seed chemicals with fixed ids.
pub const CHEMICALS_CSV: &str = "id,name,state,qty\n1,Sodium chloride,solid,200\n2,Ethanol,liquid,1000\n";

/// Seed equipment with fixed ids.
pub const EQUIPMENT_CSV: &str =
    "id,name,is_consumable,qty\n1001,Petri dish,false,15\n1002,Nitrile gloves,true,0\n";

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the streserve data directory
    pub data_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; streserve creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("streserve-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The working directory is the temp dir so no project config file
    /// from the surrounding checkout is picked up.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("streserve").expect("Failed to find streserve binary");
        cmd.current_dir(&self.temp_path);
        for key in [
            "STRESERVE_DATA_DIR",
            "STRESERVE_BUSY_TIMEOUT",
            "STRESERVE_DISABLE_AUTOINIT",
            "STRESERVE_OUTPUT_FORMAT",
            "STRESERVE_LINK_STYLE",
            "STRESERVE_MIN_GROUP_CODE",
            "STRESERVE_MAXIMUM_LOCK_WAIT_SECONDS",
            "STRESERVE_LOG_MODE",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("streserve.db")
    }

    /// Write a file under the temp dir and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Import the seed chemicals and equipment.
    pub fn seed(&self) {
        let chemicals = self.write_file("chemicals.csv", CHEMICALS_CSV);
        let equipment = self.write_file("equipment.csv", EQUIPMENT_CSV);

        self.command()
            .arg("import")
            .arg("chemicals")
            .arg(&chemicals)
            .assert()
            .success();
        self.command()
            .arg("import")
            .arg("equipment")
            .arg(&equipment)
            .assert()
            .success();
    }

    /// Run a command and parse its stdout as JSON, whatever the exit status.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run streserve");
        serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}): {}\nstderr: {}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            )
        })
    }

    /// Read a chemical's stored quantity straight from the database.
    pub fn chemical_qty(&self, id: i64) -> i64 {
        let conn = rusqlite::Connection::open(self.database_path()).expect("open database");
        conn.query_row("SELECT qty FROM chemicals WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .expect("chemical row")
    }
}
