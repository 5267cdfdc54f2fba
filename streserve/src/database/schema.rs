//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the streserve inventory.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the chemicals table.
///
/// `state` is 1 for solids and 0 for liquids. The CHECK constraint backs
/// the non-negative stock invariant at the storage level.
pub const CREATE_CHEMICALS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS chemicals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        state INTEGER NOT NULL,
        qty INTEGER NOT NULL CHECK (qty >= 0)
    )";

/// SQL statement to create the equipment table.
///
/// Only non-consumable equipment is held to a non-negative count.
pub const CREATE_EQUIPMENT_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS equipment (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        is_consumable INTEGER NOT NULL,
        qty INTEGER NOT NULL,
        CHECK (is_consumable != 0 OR qty >= 0)
    )";

/// SQL statement to create the chemical reservation log.
///
/// `chemical_id` is not a foreign key; logs reference their subject by id.
pub const CREATE_CHEMICAL_LOGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS chemical_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        group_code INTEGER NOT NULL CHECK (group_code >= 20180000),
        chemical_id INTEGER NOT NULL,
        qty INTEGER NOT NULL CHECK (qty >= 0),
        date_procured TEXT NOT NULL
    )";

/// SQL statement to create the equipment reservation log.
pub const CREATE_EQUIPMENT_LOGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS equipment_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        group_code INTEGER NOT NULL CHECK (group_code >= 20180000),
        equipment_id INTEGER NOT NULL,
        qty INTEGER NOT NULL CHECK (qty >= 0),
        date_procured TEXT NOT NULL,
        date_return TEXT NOT NULL
    )";

/// Index for resolving a chemical's logs.
pub const CREATE_CHEMICAL_LOGS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_chemical_logs_chemical ON chemical_logs(chemical_id)";

/// Index for resolving a piece of equipment's logs.
pub const CREATE_EQUIPMENT_LOGS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_equipment_logs_equipment ON equipment_logs(equipment_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a chemical. A NULL id lets SQLite assign one.
pub const INSERT_CHEMICAL: &str = r"
    INSERT INTO chemicals (id, name, state, qty)
    VALUES (?1, ?2, ?3, ?4)
";

/// SQL statement to insert equipment. A NULL id lets SQLite assign one.
pub const INSERT_EQUIPMENT: &str = r"
    INSERT INTO equipment (id, name, is_consumable, qty)
    VALUES (?1, ?2, ?3, ?4)
";
