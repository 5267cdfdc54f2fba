//! Database layer for persistent storage of inventory and reservation logs.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, schema versioning, the inventory store and the append-only
//! log store.
//!
//! # Examples
//!
//! ```no_run
//! use streserve::database::{Database, DatabaseConfig};
//! use streserve::{ChemicalState, NewChemical};
//!
//! let config = DatabaseConfig::new("/tmp/streserve.db");
//! let db = Database::open(config).unwrap();
//!
//! let salt = Database::insert_chemical(
//!     db.connection(),
//!     &NewChemical::new("Sodium chloride", ChemicalState::Solid, 200),
//! )
//! .unwrap();
//!
//! for chemical in Database::list_chemicals(db.connection()).unwrap() {
//!     println!("{} {}{}", chemical.name, chemical.qty, chemical.state.unit());
//! }
//! # let _ = salt;
//! ```

mod config;
mod connection;
mod inventory;
mod logs;
pub mod migrations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_data_dir, DatabaseConfig, DATABASE_FILE_NAME,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
