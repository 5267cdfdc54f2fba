//! Reserve command implementations.
//!
//! `reserve-chemical` and `reserve-equipment` take their values as raw
//! strings and hand them to the reservation engine unparsed, so a CLI
//! caller gets the same rejections a routed request does.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, write_json, GlobalOptions};
use clap::Args;
use streserve::operations::{ExecutionResult, ReservationOutcome};
use streserve::output::Presenter;
use streserve::{
    reserve_chemical, reserve_equipment, Config, Database, Error as LibError,
    ReserveChemicalRequest, ReserveEquipmentRequest,
};

/// Reserve a quantity of a chemical.
#[derive(Args)]
pub struct ReserveChemicalCommand {
    /// Chemical identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Eight-digit group code (e.g. 20180105)
    #[arg(long, value_name = "CODE", allow_hyphen_values = true)]
    pub group_code: Option<String>,

    /// Amount to reserve, in the chemical's unit
    #[arg(long, value_name = "QTY", allow_hyphen_values = true)]
    pub qty: Option<String>,

    /// Procurement date as YYYYMMDD
    #[arg(long, value_name = "DATE")]
    pub date_procured: Option<String>,

    /// Validate and show the plan without storing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Reserve a quantity of equipment.
#[derive(Args)]
pub struct ReserveEquipmentCommand {
    /// Equipment identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Eight-digit group code (e.g. 20180105)
    #[arg(long, value_name = "CODE", allow_hyphen_values = true)]
    pub group_code: Option<String>,

    /// Units to reserve
    #[arg(long, value_name = "QTY", allow_hyphen_values = true)]
    pub qty: Option<String>,

    /// Procurement date as YYYYMMDD
    #[arg(long, value_name = "DATE")]
    pub date_procured: Option<String>,

    /// Return date as YYYYMMDD
    #[arg(long, value_name = "DATE")]
    pub date_return: Option<String>,

    /// Validate and show the plan without storing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveChemicalCommand {
    /// Execute the reserve-chemical command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let request = ReserveChemicalRequest {
            chemical_id: self.id,
            group_code: self.group_code,
            qty: self.qty,
            date_procured: self.date_procured,
        };

        let result = reserve_chemical(&mut db, &request, &config, self.dry_run);
        report(&db, &config, result, global)
    }
}

impl ReserveEquipmentCommand {
    /// Execute the reserve-equipment command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let request = ReserveEquipmentRequest {
            equipment_id: self.id,
            group_code: self.group_code,
            qty: self.qty,
            date_procured: self.date_procured,
            date_return: self.date_return,
        };

        let result = reserve_equipment(&mut db, &request, &config, self.dry_run);
        report(&db, &config, result, global)
    }
}

/// Prints the outcome of a reservation attempt.
///
/// A stored reservation prints as an `OK` outcome. A rejection prints as an
/// `Error` outcome and still fails the command.
fn report(
    db: &Database,
    config: &Config,
    result: Result<ExecutionResult, LibError>,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    let execution = match result {
        Ok(execution) => execution,
        Err(err) if err.is_rejection() => {
            write_json(&ReservationOutcome::rejected(&err))?;
            return Err(CliError::from(err));
        }
        Err(err) => return Err(CliError::from(err)),
    };

    if execution.dry_run {
        if !global.quiet {
            print_dry_run(&execution);
        }
        return Ok(());
    }

    let Some(log) = execution.log.as_ref() else {
        return Err(CliError::SemanticFailure(
            "reservation completed without a stored log".to_string(),
        ));
    };

    let view = Presenter::new(db.connection(), config.link_style()).committed_log(log);
    write_json(&ReservationOutcome::Ok { log: view })
}

fn print_dry_run(execution: &ExecutionResult) {
    println!("Dry-run mode: no changes were made");
    for action in &execution.actions_taken {
        println!("  - {action}");
    }
    for warning in &execution.warnings {
        println!("  ! {warning}");
    }
}
