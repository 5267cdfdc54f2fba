//! Log store: append-only chemical and equipment reservation logs.
//!
//! Logs reference their subject by id only; nothing here checks that the
//! referenced chemical or equipment exists.

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::reservation::{ChemicalLog, EquipmentLog, GroupCode, NewChemicalLog, NewEquipmentLog};

use super::connection::Database;

const INSERT_CHEMICAL_LOG: &str = r"
    INSERT INTO chemical_logs (group_code, chemical_id, qty, date_procured)
    VALUES (?1, ?2, ?3, ?4)
";

const CHEMICAL_LOG_COLUMNS: &str = "id, group_code, chemical_id, qty, date_procured";

const INSERT_EQUIPMENT_LOG: &str = r"
    INSERT INTO equipment_logs (group_code, equipment_id, qty, date_procured, date_return)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const EQUIPMENT_LOG_COLUMNS: &str = "id, group_code, equipment_id, qty, date_procured, date_return";

fn group_code_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<GroupCode> {
    let raw: i64 = row.get(idx)?;
    GroupCode::try_from(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Expects row fields in this order: id, `group_code`, `chemical_id`, qty, `date_procured`
fn row_to_chemical_log(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChemicalLog> {
    Ok(ChemicalLog {
        id: row.get(0)?,
        group_code: group_code_column(row, 1)?,
        chemical_id: row.get(2)?,
        qty: row.get(3)?,
        date_procured: row.get(4)?,
    })
}

/// Expects row fields in this order: id, `group_code`, `equipment_id`, qty,
/// `date_procured`, `date_return`
fn row_to_equipment_log(row: &rusqlite::Row<'_>) -> rusqlite::Result<EquipmentLog> {
    Ok(EquipmentLog {
        id: row.get(0)?,
        group_code: group_code_column(row, 1)?,
        equipment_id: row.get(2)?,
        qty: row.get(3)?,
        date_procured: row.get(4)?,
        date_return: row.get(5)?,
    })
}

fn query_logs<T>(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
    map: fn(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let logs = stmt
        .query_map(params, map)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(logs)
}

impl Database {
    /// Appends a chemical log and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_chemical_log(conn: &Connection, log: &NewChemicalLog) -> Result<ChemicalLog> {
        conn.execute(
            INSERT_CHEMICAL_LOG,
            params![
                log.group_code.value(),
                log.chemical_id,
                log.qty,
                log.date_procured
            ],
        )?;
        Ok(ChemicalLog {
            id: conn.last_insert_rowid(),
            group_code: log.group_code,
            chemical_id: log.chemical_id,
            qty: log.qty,
            date_procured: log.date_procured,
        })
    }

    /// Gets a chemical log by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no log has this id.
    pub fn get_chemical_log(conn: &Connection, id: i64) -> Result<ChemicalLog> {
        let sql = format!("SELECT {CHEMICAL_LOG_COLUMNS} FROM chemical_logs WHERE id = ?");
        conn.query_row(&sql, [id], row_to_chemical_log)
            .optional()?
            .ok_or_else(|| Error::not_found(format!("chemical log {id}")))
    }

    /// Lists every chemical log ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_chemical_logs(conn: &Connection) -> Result<Vec<ChemicalLog>> {
        let sql = format!("SELECT {CHEMICAL_LOG_COLUMNS} FROM chemical_logs ORDER BY id");
        query_logs(conn, &sql, [], row_to_chemical_log)
    }

    /// Lists the logs that reference one chemical, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_logs_for_chemical(conn: &Connection, chemical_id: i64) -> Result<Vec<ChemicalLog>> {
        let sql = format!(
            "SELECT {CHEMICAL_LOG_COLUMNS} FROM chemical_logs WHERE chemical_id = ? ORDER BY id"
        );
        query_logs(conn, &sql, [chemical_id], row_to_chemical_log)
    }

    /// Appends an equipment log and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_equipment_log(conn: &Connection, log: &NewEquipmentLog) -> Result<EquipmentLog> {
        conn.execute(
            INSERT_EQUIPMENT_LOG,
            params![
                log.group_code.value(),
                log.equipment_id,
                log.qty,
                log.date_procured,
                log.date_return
            ],
        )?;
        Ok(EquipmentLog {
            id: conn.last_insert_rowid(),
            group_code: log.group_code,
            equipment_id: log.equipment_id,
            qty: log.qty,
            date_procured: log.date_procured,
            date_return: log.date_return,
        })
    }

    /// Gets an equipment log by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no log has this id.
    pub fn get_equipment_log(conn: &Connection, id: i64) -> Result<EquipmentLog> {
        let sql = format!("SELECT {EQUIPMENT_LOG_COLUMNS} FROM equipment_logs WHERE id = ?");
        conn.query_row(&sql, [id], row_to_equipment_log)
            .optional()?
            .ok_or_else(|| Error::not_found(format!("equipment log {id}")))
    }

    /// Lists every equipment log ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_equipment_logs(conn: &Connection) -> Result<Vec<EquipmentLog>> {
        let sql = format!("SELECT {EQUIPMENT_LOG_COLUMNS} FROM equipment_logs ORDER BY id");
        query_logs(conn, &sql, [], row_to_equipment_log)
    }

    /// Lists the logs that reference one piece of equipment, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_logs_for_equipment(
        conn: &Connection,
        equipment_id: i64,
    ) -> Result<Vec<EquipmentLog>> {
        let sql = format!(
            "SELECT {EQUIPMENT_LOG_COLUMNS} FROM equipment_logs WHERE equipment_id = ? ORDER BY id"
        );
        query_logs(conn, &sql, [equipment_id], row_to_equipment_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use crate::reservation::{end_of_day, parse_date, start_of_day};

    fn chemical_log(chemical_id: i64, qty: i64) -> NewChemicalLog {
        NewChemicalLog {
            group_code: GroupCode::try_from(20_180_105).unwrap(),
            chemical_id,
            qty,
            date_procured: start_of_day(parse_date("dateprocured", "20180601").unwrap()),
        }
    }

    fn equipment_log(equipment_id: i64, qty: i64) -> NewEquipmentLog {
        NewEquipmentLog {
            group_code: GroupCode::try_from(20_180_105).unwrap(),
            equipment_id,
            qty,
            date_procured: start_of_day(parse_date("dateprocured", "20180601").unwrap()),
            date_return: end_of_day(parse_date("datereturn", "20180610").unwrap()),
        }
    }

    #[test]
    fn test_append_assigns_unique_ids() {
        let db = create_test_database();
        let conn = db.connection();

        let first = Database::append_chemical_log(conn, &chemical_log(1, 50)).unwrap();
        let second = Database::append_chemical_log(conn, &chemical_log(1, 20)).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_chemical_log_round_trips_through_storage() {
        let db = create_test_database();
        let conn = db.connection();

        let stored = Database::append_chemical_log(conn, &chemical_log(1, 50)).unwrap();
        let fetched = Database::get_chemical_log(conn, stored.id).unwrap();
        assert_eq!(fetched, stored);
    }

    #[test]
    fn test_equipment_log_keeps_end_of_day_precision() {
        let db = create_test_database();
        let conn = db.connection();

        let stored = Database::append_equipment_log(conn, &equipment_log(1001, 5)).unwrap();
        let fetched = Database::get_equipment_log(conn, stored.id).unwrap();
        assert_eq!(fetched.date_return, stored.date_return);
        assert_eq!(
            format!("{:?}", fetched.date_return),
            "2018-06-10T23:59:59.999999"
        );
    }

    #[test]
    fn test_get_missing_log() {
        let db = create_test_database();
        assert!(Database::get_chemical_log(db.connection(), 1)
            .unwrap_err()
            .is_not_found());
        assert!(Database::get_equipment_log(db.connection(), 1)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_logs_do_not_check_references() {
        let db = create_test_database();
        // No chemical 999 exists; the store accepts the log anyway
        Database::append_chemical_log(db.connection(), &chemical_log(999, 1)).unwrap();
    }

    #[test]
    fn test_list_for_subject() {
        let db = create_test_database();
        let conn = db.connection();

        Database::append_chemical_log(conn, &chemical_log(1, 10)).unwrap();
        Database::append_chemical_log(conn, &chemical_log(2, 20)).unwrap();
        Database::append_chemical_log(conn, &chemical_log(1, 30)).unwrap();

        let for_one = Database::list_logs_for_chemical(conn, 1).unwrap();
        assert_eq!(
            for_one.iter().map(|l| l.qty).collect::<Vec<_>>(),
            vec![10, 30]
        );
        assert_eq!(Database::list_chemical_logs(conn).unwrap().len(), 3);

        Database::append_equipment_log(conn, &equipment_log(1001, 5)).unwrap();
        assert_eq!(Database::list_logs_for_equipment(conn, 1001).unwrap().len(), 1);
        assert!(Database::list_logs_for_equipment(conn, 1).unwrap().is_empty());
        assert_eq!(Database::list_equipment_logs(conn).unwrap().len(), 1);
    }
}
