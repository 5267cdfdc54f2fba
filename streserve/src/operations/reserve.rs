//! Reserve operation planning and execution.
//!
//! A reservation request arrives as flat string parameters. Planning
//! resolves the subject, parses dates and integers, and checks the request
//! against current stock in a fixed order, stopping at the first failure.
//! The resulting plan pairs a debit with a log append so that executing it
//! inside one transaction applies both or neither.

use std::collections::HashMap;

use rusqlite::Connection;

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{
    end_of_day, parse_date, start_of_day, GroupCode, NewChemicalLog, NewEquipmentLog,
};

use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::{OperationPlan, PlanAction};

/// Request parameter carrying the group code.
pub const PARAM_GROUP_CODE: &str = "groupcode";

/// Request parameter carrying the quantity.
pub const PARAM_QTY: &str = "qty";

/// Request parameter carrying the procurement date.
pub const PARAM_DATE_PROCURED: &str = "dateprocured";

/// Request parameter carrying the return date.
pub const PARAM_DATE_RETURN: &str = "datereturn";

/// A request to reserve some amount of a chemical.
///
/// Arguments are kept as raw strings until planning so that absent,
/// malformed and out-of-range values are reported in a fixed order.
///
/// # Examples
///
/// ```
/// use streserve::operations::ReserveChemicalRequest;
///
/// let request = ReserveChemicalRequest::new(1)
///     .with_group_code(20180105)
///     .with_qty(50)
///     .with_date_procured("20180601");
/// assert_eq!(request.qty.as_deref(), Some("50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveChemicalRequest {
    /// The chemical to reserve.
    pub chemical_id: i64,
    /// Raw `groupcode` argument.
    pub group_code: Option<String>,
    /// Raw `qty` argument.
    pub qty: Option<String>,
    /// Raw `dateprocured` argument, `YYYYMMDD`.
    pub date_procured: Option<String>,
}

impl ReserveChemicalRequest {
    /// Creates a request with no arguments set.
    #[must_use]
    pub fn new(chemical_id: i64) -> Self {
        Self {
            chemical_id,
            ..Self::default()
        }
    }

    /// Builds a request from flat query parameters.
    #[must_use]
    pub fn from_params(chemical_id: i64, params: &HashMap<String, String>) -> Self {
        Self {
            chemical_id,
            group_code: param(params, PARAM_GROUP_CODE),
            qty: param(params, PARAM_QTY),
            date_procured: param(params, PARAM_DATE_PROCURED),
        }
    }

    /// Sets the group code.
    #[must_use]
    pub fn with_group_code(mut self, code: i64) -> Self {
        self.group_code = Some(code.to_string());
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_qty(mut self, qty: i64) -> Self {
        self.qty = Some(qty.to_string());
        self
    }

    /// Sets the procurement date.
    #[must_use]
    pub fn with_date_procured(mut self, date: impl Into<String>) -> Self {
        self.date_procured = Some(date.into());
        self
    }
}

/// A request to reserve units of equipment over a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveEquipmentRequest {
    /// The equipment to reserve.
    pub equipment_id: i64,
    /// Raw `groupcode` argument.
    pub group_code: Option<String>,
    /// Raw `qty` argument.
    pub qty: Option<String>,
    /// Raw `dateprocured` argument, `YYYYMMDD`.
    pub date_procured: Option<String>,
    /// Raw `datereturn` argument, `YYYYMMDD`.
    pub date_return: Option<String>,
}

impl ReserveEquipmentRequest {
    /// Creates a request with no arguments set.
    #[must_use]
    pub fn new(equipment_id: i64) -> Self {
        Self {
            equipment_id,
            ..Self::default()
        }
    }

    /// Builds a request from flat query parameters.
    #[must_use]
    pub fn from_params(equipment_id: i64, params: &HashMap<String, String>) -> Self {
        Self {
            equipment_id,
            group_code: param(params, PARAM_GROUP_CODE),
            qty: param(params, PARAM_QTY),
            date_procured: param(params, PARAM_DATE_PROCURED),
            date_return: param(params, PARAM_DATE_RETURN),
        }
    }

    /// Sets the group code.
    #[must_use]
    pub fn with_group_code(mut self, code: i64) -> Self {
        self.group_code = Some(code.to_string());
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_qty(mut self, qty: i64) -> Self {
        self.qty = Some(qty.to_string());
        self
    }

    /// Sets the procurement date.
    #[must_use]
    pub fn with_date_procured(mut self, date: impl Into<String>) -> Self {
        self.date_procured = Some(date.into());
        self
    }

    /// Sets the return date.
    #[must_use]
    pub fn with_date_return(mut self, date: impl Into<String>) -> Self {
        self.date_return = Some(date.into());
        self
    }
}

/// Plans a chemical reservation against current stock.
pub struct ChemicalReservePlan<'a> {
    request: &'a ReserveChemicalRequest,
    config: &'a Config,
}

impl<'a> ChemicalReservePlan<'a> {
    /// Creates a planner for `request`.
    #[must_use]
    pub const fn new(request: &'a ReserveChemicalRequest, config: &'a Config) -> Self {
        Self { request, config }
    }

    /// Builds an operation plan for this request.
    ///
    /// This method performs all validation and does NOT modify the store.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in this order:
    /// - [`Error::NotFound`] if the chemical does not exist
    /// - [`Error::InvalidDate`] if `dateprocured` is present but malformed
    /// - [`Error::MissingArgument`] naming every absent argument
    /// - [`Error::Validation`] if `groupcode` or `qty` is not an integer
    /// - [`Error::InsufficientStock`] if stock would go negative
    /// - [`Error::InvalidQuantity`] if `qty` is negative
    /// - [`Error::UnrecognizedGroupCode`] if the group code is too low
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let request = self.request;
        let chemical = Database::require_chemical(conn, request.chemical_id)?;

        let group_code = argument(request.group_code.as_deref());
        let qty = argument(request.qty.as_deref());
        let raw_date_procured = argument(request.date_procured.as_deref());

        let date_procured = raw_date_procured
            .map(|raw| parse_date(PARAM_DATE_PROCURED, raw))
            .transpose()?;

        let (Some(group_code), Some(qty), Some(date_procured)) = (group_code, qty, date_procured)
        else {
            return Err(missing(&[
                (PARAM_GROUP_CODE, group_code.is_some()),
                (PARAM_QTY, qty.is_some()),
                (PARAM_DATE_PROCURED, raw_date_procured.is_some()),
            ]));
        };

        let group_code = parse_integer(PARAM_GROUP_CODE, group_code)?;
        let qty = parse_integer(PARAM_QTY, qty)?;

        check_stock(chemical.qty, qty)?;
        check_quantity(qty)?;
        let group_code = GroupCode::with_minimum(group_code, self.config.group_code_minimum())?;

        let mut plan = OperationPlan::new(format!(
            "Reserve {qty} {} of {} for group {group_code}",
            chemical.state.unit(),
            chemical.name
        ))
        .add_action(PlanAction::DebitChemical {
            chemical_id: chemical.id,
            amount: qty,
        })
        .add_action(PlanAction::AppendChemicalLog(NewChemicalLog {
            group_code,
            chemical_id: chemical.id,
            qty,
            date_procured: start_of_day(date_procured),
        }));

        if qty > 0 && chemical.qty == qty {
            plan = plan.add_warning(format!("{} will be out of stock", chemical.name));
        }

        Ok(plan)
    }
}

/// Plans an equipment reservation against current stock.
pub struct EquipmentReservePlan<'a> {
    request: &'a ReserveEquipmentRequest,
    config: &'a Config,
}

impl<'a> EquipmentReservePlan<'a> {
    /// Creates a planner for `request`.
    #[must_use]
    pub const fn new(request: &'a ReserveEquipmentRequest, config: &'a Config) -> Self {
        Self { request, config }
    }

    /// Builds an operation plan for this request.
    ///
    /// Checks run in the same order as for chemicals. Consumable equipment
    /// skips the stock check and is never debited.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; see
    /// [`ChemicalReservePlan::build_plan`].
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let request = self.request;
        let equipment = Database::require_equipment(conn, request.equipment_id)?;

        let group_code = argument(request.group_code.as_deref());
        let qty = argument(request.qty.as_deref());
        let raw_date_procured = argument(request.date_procured.as_deref());
        let raw_date_return = argument(request.date_return.as_deref());

        let date_procured = raw_date_procured
            .map(|raw| parse_date(PARAM_DATE_PROCURED, raw))
            .transpose()?;
        let date_return = raw_date_return
            .map(|raw| parse_date(PARAM_DATE_RETURN, raw))
            .transpose()?;

        let (Some(group_code), Some(qty), Some(date_procured), Some(date_return)) =
            (group_code, qty, date_procured, date_return)
        else {
            return Err(missing(&[
                (PARAM_GROUP_CODE, group_code.is_some()),
                (PARAM_QTY, qty.is_some()),
                (PARAM_DATE_PROCURED, raw_date_procured.is_some()),
                (PARAM_DATE_RETURN, raw_date_return.is_some()),
            ]));
        };

        let group_code = parse_integer(PARAM_GROUP_CODE, group_code)?;
        let qty = parse_integer(PARAM_QTY, qty)?;

        if equipment.tracks_stock() {
            check_stock(equipment.qty, qty)?;
        }
        check_quantity(qty)?;
        let group_code = GroupCode::with_minimum(group_code, self.config.group_code_minimum())?;

        let mut plan = OperationPlan::new(format!(
            "Reserve {qty} of {} for group {group_code}",
            equipment.name
        ));

        if equipment.tracks_stock() {
            plan = plan.add_action(PlanAction::DebitEquipment {
                equipment_id: equipment.id,
                amount: qty,
            });
            if qty > 0 && equipment.qty == qty {
                plan = plan.add_warning(format!("{} will be out of stock", equipment.name));
            }
        }

        Ok(plan.add_action(PlanAction::AppendEquipmentLog(NewEquipmentLog {
            group_code,
            equipment_id: equipment.id,
            qty,
            date_procured: start_of_day(date_procured),
            date_return: end_of_day(date_return),
        })))
    }
}

/// Reserves a chemical: plans and executes inside one write transaction.
///
/// With `dry_run` the plan is reported and the transaction rolled back.
///
/// # Errors
///
/// Returns a rejection from planning, [`Error::LockTimeout`] if the write
/// lock could not be taken, or a database error.
///
/// # Examples
///
/// ```no_run
/// use streserve::config::Config;
/// use streserve::database::{Database, DatabaseConfig};
/// use streserve::operations::{reserve_chemical, ReserveChemicalRequest};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/streserve.db")).unwrap();
/// let request = ReserveChemicalRequest::new(1)
///     .with_group_code(20180105)
///     .with_qty(50)
///     .with_date_procured("20180601");
///
/// let result = reserve_chemical(&mut db, &request, &Config::default(), false).unwrap();
/// assert!(result.log.is_some());
/// ```
pub fn reserve_chemical(
    db: &mut Database,
    request: &ReserveChemicalRequest,
    config: &Config,
    dry_run: bool,
) -> Result<ExecutionResult> {
    run_in_transaction(db, dry_run, |conn| {
        ChemicalReservePlan::new(request, config).build_plan(conn)
    })
}

/// Reserves equipment: plans and executes inside one write transaction.
///
/// # Errors
///
/// See [`reserve_chemical`].
pub fn reserve_equipment(
    db: &mut Database,
    request: &ReserveEquipmentRequest,
    config: &Config,
    dry_run: bool,
) -> Result<ExecutionResult> {
    run_in_transaction(db, dry_run, |conn| {
        EquipmentReservePlan::new(request, config).build_plan(conn)
    })
}

fn run_in_transaction(
    db: &mut Database,
    dry_run: bool,
    build: impl FnOnce(&Connection) -> Result<OperationPlan>,
) -> Result<ExecutionResult> {
    // The write lock is held from the stock read through to the commit.
    // Dropping the transaction on an early return rolls it back.
    let tx = db.immediate_transaction()?;
    let plan = build(&tx)?;

    let executor = PlanExecutor::new(&tx);
    let result = if dry_run {
        executor.dry_run().execute(&plan)?
    } else {
        executor.execute(&plan)?
    };

    if dry_run {
        tx.rollback()?;
    } else {
        tx.commit()?;
        log::info!("{}", plan.description);
    }
    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    Ok(result)
}

/// Blank and whitespace-only arguments count as absent.
fn argument(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn param(params: &HashMap<String, String>, name: &str) -> Option<String> {
    argument(params.get(name).map(String::as_str)).map(str::to_string)
}

fn missing(arguments: &[(&str, bool)]) -> Error {
    Error::MissingArgument {
        arguments: arguments
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| (*name).to_string())
            .collect(),
    }
}

fn parse_integer(field: &str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| Error::Validation {
        field: field.to_string(),
        message: format!("expected an integer, got {raw:?}"),
    })
}

fn check_stock(available: i64, requested: i64) -> Result<()> {
    if i128::from(available) - i128::from(requested) < 0 {
        return Err(Error::InsufficientStock {
            available,
            requested,
        });
    }
    Ok(())
}

const fn check_quantity(qty: i64) -> Result<()> {
    if qty < 0 {
        return Err(Error::InvalidQuantity { qty });
    }
    Ok(())
}
