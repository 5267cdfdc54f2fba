#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # streserve
//!
//! A library for tracking chemical and equipment reservations in a
//! teaching laboratory.
//!
//! Student groups reserve amounts of chemicals and units of equipment.
//! Each accepted reservation debits stock and appends a log in one
//! transaction; stock of chemicals and non-consumable equipment never goes
//! negative.
//!
//! ## Core Types
//!
//! - [`Chemical`] and [`Equipment`]: Inventory records
//! - [`ChemicalLog`], [`EquipmentLog`] and [`GroupCode`]: Reservation records
//! - [`Database`]: SQLite-backed store
//! - [`router::Router`]: Path-based dispatcher over the store
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use streserve::{ChemicalState, GroupCode};
//!
//! let code = GroupCode::try_from(20180105).unwrap();
//! assert_eq!(code.section(), 1);
//!
//! assert_eq!(ChemicalState::Solid.unit(), "g");
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod operations;
pub mod output;
pub mod reservation;
pub mod router;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use inventory::{Chemical, ChemicalState, Equipment, NewChemical, NewEquipment};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    reserve_chemical, reserve_equipment, ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
    ReservationOutcome, ReserveChemicalRequest, ReserveEquipmentRequest,
};
pub use output::{LinkStyle, Presenter};
pub use reservation::{ChemicalLog, EquipmentLog, GroupCode, ReservationLog};
pub use router::{Response, Route, Router};
