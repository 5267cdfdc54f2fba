//! List command implementation.
//!
//! This module implements the `list` command, which displays inventory and
//! reservation logs in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, write_delimited, write_json, write_table, GlobalOptions,
};
use chrono::NaiveDateTime;
use clap::{Args, ValueEnum};
use streserve::config::OutputFormat as ConfigFormat;
use streserve::output::Presenter;
use streserve::Database;

const CHEMICAL_HEADERS: [&str; 5] = ["id", "name", "state", "unit", "qty"];
const EQUIPMENT_HEADERS: [&str; 4] = ["id", "name", "is_consumable", "qty"];
const CHEMICAL_LOG_HEADERS: [&str; 5] = ["id", "group_code", "chemical_id", "qty", "date_procured"];
const EQUIPMENT_LOG_HEADERS: [&str; 6] = [
    "id",
    "group_code",
    "equipment_id",
    "qty",
    "date_procured",
    "date_return",
];

/// List inventory or reservation logs.
#[derive(Args)]
pub struct ListCommand {
    /// What to list
    #[arg(value_enum)]
    pub kind: ListKind,

    /// Output format (defaults to the configured `output_format`)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

/// Record collections that can be listed.
#[derive(Clone, Copy, ValueEnum)]
pub enum ListKind {
    /// All chemicals
    Chemicals,
    /// All equipment
    Equipment,
    /// All chemical reservation logs
    ChemicalLogs,
    /// All equipment reservation logs
    EquipmentLogs,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ConfigFormat> for OutputFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Table => Self::Table,
            ConfigFormat::Json => Self::Json,
            ConfigFormat::Csv => Self::Csv,
            ConfigFormat::Tsv => Self::Tsv,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let format = self
            .format
            .unwrap_or_else(|| OutputFormat::from(config.output_format()));

        if let OutputFormat::Json = format {
            let presenter = Presenter::new(db.connection(), config.link_style());
            return match self.kind {
                ListKind::Chemicals => write_json(&presenter.chemicals()?),
                ListKind::Equipment => write_json(&presenter.equipment_list()?),
                ListKind::ChemicalLogs => write_json(&presenter.chemical_logs()?),
                ListKind::EquipmentLogs => write_json(&presenter.equipment_logs()?),
            };
        }

        let (headers, rows) = rows_for(&db, self.kind)?;
        match format {
            OutputFormat::Csv => write_delimited(headers, &rows, b','),
            OutputFormat::Tsv => write_delimited(headers, &rows, b'\t'),
            OutputFormat::Table | OutputFormat::Json => write_table(headers, &rows),
        }
    }
}

fn format_date(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Flattens a collection into column headers and string rows.
fn rows_for(
    db: &Database,
    kind: ListKind,
) -> Result<(&'static [&'static str], Vec<Vec<String>>), CliError> {
    let conn = db.connection();
    let result: (&'static [&'static str], Vec<Vec<String>>) = match kind {
        ListKind::Chemicals => (
            &CHEMICAL_HEADERS,
            Database::list_chemicals(conn)?
                .into_iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.name,
                        c.state.to_string(),
                        c.state.unit().to_string(),
                        c.qty.to_string(),
                    ]
                })
                .collect(),
        ),
        ListKind::Equipment => (
            &EQUIPMENT_HEADERS,
            Database::list_equipment(conn)?
                .into_iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        e.name,
                        e.is_consumable.to_string(),
                        e.qty.to_string(),
                    ]
                })
                .collect(),
        ),
        ListKind::ChemicalLogs => (
            &CHEMICAL_LOG_HEADERS,
            Database::list_chemical_logs(conn)?
                .iter()
                .map(|log| {
                    vec![
                        log.id.to_string(),
                        log.group_code.to_string(),
                        log.chemical_id.to_string(),
                        log.qty.to_string(),
                        format_date(&log.date_procured),
                    ]
                })
                .collect(),
        ),
        ListKind::EquipmentLogs => (
            &EQUIPMENT_LOG_HEADERS,
            Database::list_equipment_logs(conn)?
                .iter()
                .map(|log| {
                    vec![
                        log.id.to_string(),
                        log.group_code.to_string(),
                        log.equipment_id.to_string(),
                        log.qty.to_string(),
                        format_date(&log.date_procured),
                        format_date(&log.date_return),
                    ]
                })
                .collect(),
        ),
    };

    Ok(result)
}
