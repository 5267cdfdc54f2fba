//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CHEMICALS_TABLE, CREATE_CHEMICAL_LOGS_INDEX, CREATE_CHEMICAL_LOGS_TABLE,
    CREATE_EQUIPMENT_LOGS_INDEX, CREATE_EQUIPMENT_LOGS_TABLE, CREATE_EQUIPMENT_TABLE,
    CREATE_METADATA_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// Creates the metadata table, both inventory tables, both log tables and
/// their indices, then records the schema version.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use streserve::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    conn.execute(CREATE_CHEMICALS_TABLE, [])?;
    conn.execute(CREATE_EQUIPMENT_TABLE, [])?;
    conn.execute(CREATE_CHEMICAL_LOGS_TABLE, [])?;
    conn.execute(CREATE_EQUIPMENT_LOGS_TABLE, [])?;

    conn.execute(CREATE_CHEMICAL_LOGS_INDEX, [])?;
    conn.execute(CREATE_EQUIPMENT_LOGS_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (both of which mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let has_metadata: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')",
        [],
        |row| row.get(0),
    )?;
    if !has_metadata {
        return Ok(0);
    }

    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized; any other version must
/// match [`CURRENT_SCHEMA_VERSION`] exactly.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the stored version is
/// older or newer than this build understands, or a database error if
/// the queries fail.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
