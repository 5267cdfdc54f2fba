//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! streserve library.

use std::collections::HashMap;
use std::path::Path;

use streserve::database::{Database, DatabaseConfig};
use streserve::{Chemical, ChemicalState, Equipment, NewChemical, NewEquipment};

/// Creates a test database in a temporary location.
///
/// The temporary directory is leaked so that it outlives the database.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let db = open_database(dir.path());

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Opens (creating if needed) the database inside `data_dir`.
#[allow(dead_code)]
pub fn open_database(data_dir: &Path) -> Database {
    Database::open(DatabaseConfig::in_data_dir(data_dir)).unwrap()
}

/// Stores 200 g of sodium chloride.
#[allow(dead_code)]
pub fn seed_sodium_chloride(db: &Database) -> Chemical {
    Database::insert_chemical(
        db.connection(),
        &NewChemical::new("Sodium chloride", ChemicalState::Solid, 200),
    )
    .unwrap()
}

/// Stores 15 petri dishes under id 1001.
#[allow(dead_code)]
pub fn seed_petri_dishes(db: &Database) -> Equipment {
    Database::insert_equipment(
        db.connection(),
        &NewEquipment::new("Petri dish", false, 15).with_id(1001),
    )
    .unwrap()
}

/// Builds a parameter map from `key=value` pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
