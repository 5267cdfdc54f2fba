//! Transaction management utilities.
//!
//! This module provides batch helpers that seed the inventory atomically.

use crate::error::Result;
use crate::inventory::{Chemical, Equipment, NewChemical, NewEquipment};

use super::connection::Database;

impl Database {
    /// Inserts multiple chemicals in a single transaction.
    ///
    /// This operation is atomic: either all chemicals are stored or none
    /// are.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use streserve::database::{Database, DatabaseConfig};
    /// use streserve::{ChemicalState, NewChemical};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/streserve.db")).unwrap();
    /// db.insert_chemicals(&[
    ///     NewChemical::new("Sodium chloride", ChemicalState::Solid, 200),
    ///     NewChemical::new("Ethanol", ChemicalState::Liquid, 1000),
    /// ])
    /// .unwrap();
    /// ```
    pub fn insert_chemicals(&mut self, chemicals: &[NewChemical]) -> Result<Vec<Chemical>> {
        let tx = self.immediate_transaction()?;
        let stored = chemicals
            .iter()
            .map(|chemical| Self::insert_chemical(&tx, chemical))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;

        log::info!("Imported {} chemicals", stored.len());
        Ok(stored)
    }

    /// Inserts multiple pieces of equipment in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or if any insert fails. Nothing is stored on failure.
    pub fn insert_equipment_batch(&mut self, equipment: &[NewEquipment]) -> Result<Vec<Equipment>> {
        let tx = self.immediate_transaction()?;
        let stored = equipment
            .iter()
            .map(|item| Self::insert_equipment(&tx, item))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;

        log::info!("Imported {} equipment records", stored.len());
        Ok(stored)
    }
}
