//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the store.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::ReservationLog;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The log that was appended. Always `None` for a dry run.
    pub log: Option<ReservationLog>,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool, log: Option<ReservationLog>) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            log,
        }
    }
}

/// Executes operation plans against the store.
///
/// The executor borrows a connection, which is normally an open
/// transaction: the caller decides whether the applied actions are
/// committed or rolled back.
///
/// # Examples
///
/// ```no_run
/// use streserve::database::{Database, DatabaseConfig};
/// use streserve::operations::{OperationPlan, PlanAction, PlanExecutor};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/streserve.db")).unwrap();
/// let plan = OperationPlan::new("Debit")
///     .add_action(PlanAction::DebitChemical { chemical_id: 1, amount: 50 });
///
/// let tx = db.immediate_transaction().unwrap();
/// let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
/// tx.commit().unwrap();
/// assert!(!result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not
    /// touch the store.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// Actions run in plan order and stop at the first failure. The
    /// connection is left as-is on failure; rolling back is up to the
    /// owner of the transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run: {}", plan.description);
            return Ok(ExecutionResult::from_plan(plan, true, None));
        }

        let mut appended = None;
        for action in &plan.actions {
            log::debug!("{}", action.description());
            if let Some(log) = self.execute_action(action)? {
                appended = Some(log);
            }
        }

        Ok(ExecutionResult::from_plan(plan, false, appended))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Option<ReservationLog>> {
        match action {
            PlanAction::DebitChemical {
                chemical_id,
                amount,
            } => {
                Database::debit_chemical(self.conn, *chemical_id, *amount)?;
                Ok(None)
            }
            PlanAction::DebitEquipment {
                equipment_id,
                amount,
            } => {
                Database::debit_equipment(self.conn, *equipment_id, *amount)?;
                Ok(None)
            }
            PlanAction::AppendChemicalLog(log) => Ok(Some(ReservationLog::Chemical(
                Database::append_chemical_log(self.conn, log)?,
            ))),
            PlanAction::AppendEquipmentLog(log) => Ok(Some(ReservationLog::Equipment(
                Database::append_equipment_log(self.conn, log)?,
            ))),
        }
    }
}
