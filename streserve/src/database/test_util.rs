//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::inventory::{Chemical, ChemicalState, Equipment, NewChemical, NewEquipment};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Stores 200 g of sodium chloride.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn seed_sodium_chloride(db: &Database) -> Chemical {
    Database::insert_chemical(
        db.connection(),
        &NewChemical::new("Sodium chloride", ChemicalState::Solid, 200),
    )
    .unwrap()
}

/// Stores fifteen petri dishes under id 1001.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn seed_petri_dishes(db: &Database) -> Equipment {
    Database::insert_equipment(
        db.connection(),
        &NewEquipment::new("Petri dish", false, 15).with_id(1001),
    )
    .unwrap()
}
