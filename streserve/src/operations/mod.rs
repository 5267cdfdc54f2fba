//! Reservation operations using the plan-execute pattern.
//!
//! This module separates planning from execution to enable dry-run mode,
//! better testing, and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Resolves the subject, validates the request against
//!    current stock and builds a plan
//! 2. **Execution**: Takes the plan and performs the debit and log append
//!
//! Both phases run inside one `IMMEDIATE` transaction, so no other writer
//! can change stock between the check and the debit.
//!
//! # Examples
//!
//! ```no_run
//! use streserve::config::ConfigBuilder;
//! use streserve::database::{Database, DatabaseConfig};
//! use streserve::operations::{ChemicalReservePlan, PlanExecutor, ReserveChemicalRequest};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/streserve.db")).unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//! let request = ReserveChemicalRequest::new(1)
//!     .with_group_code(20180105)
//!     .with_qty(50)
//!     .with_date_procured("20180601");
//!
//! let tx = db.immediate_transaction().unwrap();
//!
//! // Generate plan
//! let plan = ChemicalReservePlan::new(&request, &config).build_plan(&tx).unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
//! tx.commit().unwrap();
//! ```

pub mod executor;
pub mod init;
pub mod outcome;
pub mod plan;
pub mod reserve;

#[cfg(test)]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult, InitStep};
pub use outcome::ReservationOutcome;
pub use plan::{OperationPlan, PlanAction};
pub use reserve::{
    reserve_chemical, reserve_equipment, ChemicalReservePlan, EquipmentReservePlan,
    ReserveChemicalRequest, ReserveEquipmentRequest, PARAM_DATE_PROCURED, PARAM_DATE_RETURN,
    PARAM_GROUP_CODE, PARAM_QTY,
};
