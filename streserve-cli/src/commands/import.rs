//! Import command implementation.
//!
//! Loads chemicals or equipment from a CSV file with a header row. All rows
//! of one file are stored in a single transaction, so a bad row stores
//! nothing.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use streserve::{ChemicalState, NewChemical, NewEquipment};

/// Import inventory from a CSV file.
#[derive(Args)]
pub struct ImportCommand {
    /// Kind of record the file holds
    #[arg(value_enum)]
    pub kind: ImportKind,

    /// CSV file with a header row
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Record kinds that can be imported.
#[derive(Clone, Copy, ValueEnum)]
pub enum ImportKind {
    /// Columns: `id` (optional), `name`, `state`, `qty`
    Chemicals,
    /// Columns: `id` (optional), `name`, `is_consumable`, `qty`
    Equipment,
}

#[derive(Debug, Deserialize)]
struct ChemicalRow {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    state: String,
    qty: i64,
}

#[derive(Debug, Deserialize)]
struct EquipmentRow {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    is_consumable: bool,
    qty: i64,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let (count, noun) = match self.kind {
            ImportKind::Chemicals => {
                let rows = read_chemicals(&self.file)?;
                let mut db = open_database(global, &config)?;
                (db.insert_chemicals(&rows)?.len(), "chemicals")
            }
            ImportKind::Equipment => {
                let rows = read_equipment(&self.file)?;
                let mut db = open_database(global, &config)?;
                (db.insert_equipment_batch(&rows)?.len(), "equipment records")
            }
        };

        if !global.quiet {
            println!("Imported {count} {noun}");
        }

        Ok(())
    }
}

/// Parses a chemical state column.
///
/// Accepts `solid`/`liquid` as well as the boolean form stored in the
/// database, where `true` means solid.
fn parse_state(raw: &str) -> Result<ChemicalState, CliError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "solid" | "true" | "1" => Ok(ChemicalState::Solid),
        "liquid" | "false" | "0" => Ok(ChemicalState::Liquid),
        other => Err(CliError::InvalidArguments(format!(
            "unknown chemical state '{other}' (expected solid or liquid)"
        ))),
    }
}

fn read_chemicals(path: &Path) -> Result<Vec<NewChemical>, CliError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    reader
        .deserialize::<ChemicalRow>()
        .map(|row| -> Result<NewChemical, CliError> {
            let row = row?;
            let chemical = NewChemical::new(row.name, parse_state(&row.state)?, row.qty);
            Ok(match row.id {
                Some(id) => chemical.with_id(id),
                None => chemical,
            })
        })
        .collect()
}

fn read_equipment(path: &Path) -> Result<Vec<NewEquipment>, CliError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    reader
        .deserialize::<EquipmentRow>()
        .map(|row| -> Result<NewEquipment, CliError> {
            let row = row?;
            let equipment = NewEquipment::new(row.name, row.is_consumable, row.qty);
            Ok(match row.id {
                Some(id) => equipment.with_id(id),
                None => equipment,
            })
        })
        .collect()
}
