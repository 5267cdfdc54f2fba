//! Inventory store: chemicals and equipment.
//!
//! Reads take a plain `&Connection` so they can run inside an open
//! transaction. `debit_*` is the only path by which a quantity changes.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::inventory::{Chemical, Equipment, NewChemical, NewEquipment};

use super::connection::Database;
use super::schema::{INSERT_CHEMICAL, INSERT_EQUIPMENT};

const SELECT_CHEMICAL: &str = "SELECT id, name, state, qty FROM chemicals WHERE id = ?";

const LIST_CHEMICALS: &str = "SELECT id, name, state, qty FROM chemicals ORDER BY id";

const DEBIT_CHEMICAL: &str = r"
    UPDATE chemicals
    SET qty = qty - ?2
    WHERE id = ?1 AND qty >= ?2
";

const SELECT_EQUIPMENT: &str =
    "SELECT id, name, is_consumable, qty FROM equipment WHERE id = ?";

const LIST_EQUIPMENT: &str = "SELECT id, name, is_consumable, qty FROM equipment ORDER BY id";

const DEBIT_EQUIPMENT: &str = r"
    UPDATE equipment
    SET qty = qty - ?2
    WHERE id = ?1 AND is_consumable = 0 AND qty >= ?2
";

/// Expects row fields in this order: id, name, state, qty
fn row_to_chemical(row: &rusqlite::Row<'_>) -> rusqlite::Result<Chemical> {
    let solid: bool = row.get(2)?;
    Ok(Chemical {
        id: row.get(0)?,
        name: row.get(1)?,
        state: solid.into(),
        qty: row.get(3)?,
    })
}

/// Expects row fields in this order: id, name, `is_consumable`, qty
fn row_to_equipment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Equipment> {
    Ok(Equipment {
        id: row.get(0)?,
        name: row.get(1)?,
        is_consumable: row.get(2)?,
        qty: row.get(3)?,
    })
}

impl Database {
    /// Gets a chemical by id.
    ///
    /// Returns `None` if no chemical has this id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_chemical(conn: &Connection, id: i64) -> Result<Option<Chemical>> {
        conn.query_row(SELECT_CHEMICAL, [id], row_to_chemical)
            .optional()
            .map_err(Into::into)
    }

    /// Gets a chemical by id, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no chemical has this id.
    pub fn require_chemical(conn: &Connection, id: i64) -> Result<Chemical> {
        Self::get_chemical(conn, id)?.ok_or_else(|| Error::not_found(format!("chemical {id}")))
    }

    /// Lists every chemical ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_chemicals(conn: &Connection) -> Result<Vec<Chemical>> {
        let mut stmt = conn.prepare(LIST_CHEMICALS)?;
        let chemicals = stmt
            .query_map([], row_to_chemical)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(chemicals)
    }

    /// Stores a new chemical and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuantity`] for a negative starting amount,
    /// or a database error if the insert fails (for example a duplicate id).
    pub fn insert_chemical(conn: &Connection, chemical: &NewChemical) -> Result<Chemical> {
        if chemical.qty < 0 {
            return Err(Error::InvalidQuantity { qty: chemical.qty });
        }
        conn.execute(
            INSERT_CHEMICAL,
            params![
                chemical.id,
                chemical.name,
                chemical.state.is_solid(),
                chemical.qty
            ],
        )?;
        Ok(Chemical {
            id: conn.last_insert_rowid(),
            name: chemical.name.clone(),
            state: chemical.state,
            qty: chemical.qty,
        })
    }

    /// Subtracts `amount` from a chemical's stock and returns the updated row.
    ///
    /// The update is guarded so that it can never leave a negative
    /// quantity, even if the caller's own check raced.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::InvalidQuantity`] if `amount` is negative
    /// - [`Error::NotFound`] if the chemical does not exist
    /// - [`Error::InsufficientStock`] if fewer than `amount` units remain
    pub fn debit_chemical(conn: &Connection, id: i64, amount: i64) -> Result<Chemical> {
        if amount < 0 {
            return Err(Error::InvalidQuantity { qty: amount });
        }

        let rows = conn.execute(DEBIT_CHEMICAL, params![id, amount])?;
        let chemical = Self::require_chemical(conn, id)?;
        if rows == 0 {
            return Err(Error::InsufficientStock {
                available: chemical.qty,
                requested: amount,
            });
        }

        log::debug!("Debited {amount} from chemical {id}, {} left", chemical.qty);
        Ok(chemical)
    }

    /// Gets a piece of equipment by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_equipment(conn: &Connection, id: i64) -> Result<Option<Equipment>> {
        conn.query_row(SELECT_EQUIPMENT, [id], row_to_equipment)
            .optional()
            .map_err(Into::into)
    }

    /// Gets a piece of equipment by id, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no equipment has this id.
    pub fn require_equipment(conn: &Connection, id: i64) -> Result<Equipment> {
        Self::get_equipment(conn, id)?.ok_or_else(|| Error::not_found(format!("equipment {id}")))
    }

    /// Lists all equipment ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_equipment(conn: &Connection) -> Result<Vec<Equipment>> {
        let mut stmt = conn.prepare(LIST_EQUIPMENT)?;
        let equipment = stmt
            .query_map([], row_to_equipment)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(equipment)
    }

    /// Stores new equipment and returns it with its assigned id.
    ///
    /// Consumable equipment may carry any informational count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuantity`] for a negative count on
    /// non-consumable equipment, or a database error if the insert fails.
    pub fn insert_equipment(conn: &Connection, equipment: &NewEquipment) -> Result<Equipment> {
        if !equipment.is_consumable && equipment.qty < 0 {
            return Err(Error::InvalidQuantity { qty: equipment.qty });
        }
        conn.execute(
            INSERT_EQUIPMENT,
            params![
                equipment.id,
                equipment.name,
                equipment.is_consumable,
                equipment.qty
            ],
        )?;
        Ok(Equipment {
            id: conn.last_insert_rowid(),
            name: equipment.name.clone(),
            is_consumable: equipment.is_consumable,
            qty: equipment.qty,
        })
    }

    /// Subtracts `amount` from a piece of equipment's stock.
    ///
    /// Consumable equipment is returned unchanged: its count is never
    /// checked or debited.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::InvalidQuantity`] if `amount` is negative
    /// - [`Error::NotFound`] if the equipment does not exist
    /// - [`Error::InsufficientStock`] if fewer than `amount` units remain
    pub fn debit_equipment(conn: &Connection, id: i64, amount: i64) -> Result<Equipment> {
        if amount < 0 {
            return Err(Error::InvalidQuantity { qty: amount });
        }

        let equipment = Self::require_equipment(conn, id)?;
        if !equipment.tracks_stock() {
            return Ok(equipment);
        }

        let rows = conn.execute(DEBIT_EQUIPMENT, params![id, amount])?;
        let equipment = Self::require_equipment(conn, id)?;
        if rows == 0 {
            return Err(Error::InsufficientStock {
                available: equipment.qty,
                requested: amount,
            });
        }

        log::debug!("Debited {amount} from equipment {id}, {} left", equipment.qty);
        Ok(equipment)
    }
}
