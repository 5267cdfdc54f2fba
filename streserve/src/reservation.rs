//! Reservation log types.
//!
//! This module provides the immutable records produced by a successful
//! reservation, the validated [`GroupCode`] they carry, and the date
//! handling that turns raw `YYYYMMDD` strings into reservation windows.

mod window;

#[cfg(test)]
mod proptests;

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use window::{end_of_day, parse_date, start_of_day, DATE_FORMAT_HINT};

/// A student group identifier of the form `BBBBSSNN`.
///
/// The first four digits are the batch, the next two the section and the
/// last two the group number. Codes below [`GroupCode::MIN`] are not
/// recognized.
///
/// # Examples
///
/// ```
/// use streserve::GroupCode;
///
/// let code = GroupCode::try_from(20180105).unwrap();
/// assert_eq!(code.batch(), 2018);
/// assert_eq!(code.section(), 1);
/// assert_eq!(code.number(), 5);
///
/// assert!(GroupCode::try_from(20170101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCode(i64);

impl GroupCode {
    /// The lowest recognized group code.
    pub const MIN: i64 = 20_180_000;

    /// Validates a group code against a minimum that may be raised above
    /// [`GroupCode::MIN`] by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedGroupCode`] if `value` is below
    /// `max(minimum, GroupCode::MIN)`.
    pub fn with_minimum(value: i64, minimum: i64) -> Result<Self> {
        let minimum = minimum.max(Self::MIN);
        if value < minimum {
            return Err(Error::UnrecognizedGroupCode {
                code: value,
                minimum,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw integer code.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the batch (enrolment year) portion.
    #[must_use]
    pub const fn batch(self) -> i64 {
        self.0 / 10_000
    }

    /// Returns the section portion.
    #[must_use]
    pub const fn section(self) -> i64 {
        (self.0 / 100) % 100
    }

    /// Returns the group number within the section.
    #[must_use]
    pub const fn number(self) -> i64 {
        self.0 % 100
    }
}

impl TryFrom<i64> for GroupCode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::with_minimum(value, Self::MIN)
    }
}

impl fmt::Display for GroupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored chemical reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalLog {
    /// Store-assigned identifier.
    pub id: i64,
    /// The reserving group.
    pub group_code: GroupCode,
    /// The reserved chemical.
    pub chemical_id: i64,
    /// Amount reserved, in the chemical's unit.
    pub qty: i64,
    /// Start of the procurement day.
    pub date_procured: NaiveDateTime,
}

/// A stored equipment reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentLog {
    /// Store-assigned identifier.
    pub id: i64,
    /// The reserving group.
    pub group_code: GroupCode,
    /// The reserved equipment.
    pub equipment_id: i64,
    /// Units reserved.
    pub qty: i64,
    /// Start of the procurement day.
    pub date_procured: NaiveDateTime,
    /// End of the return day.
    pub date_return: NaiveDateTime,
}

/// A chemical reservation that has been validated but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChemicalLog {
    /// The reserving group.
    pub group_code: GroupCode,
    /// The reserved chemical.
    pub chemical_id: i64,
    /// Amount reserved.
    pub qty: i64,
    /// Start of the procurement day.
    pub date_procured: NaiveDateTime,
}

/// An equipment reservation that has been validated but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEquipmentLog {
    /// The reserving group.
    pub group_code: GroupCode,
    /// The reserved equipment.
    pub equipment_id: i64,
    /// Units reserved.
    pub qty: i64,
    /// Start of the procurement day.
    pub date_procured: NaiveDateTime,
    /// End of the return day.
    pub date_return: NaiveDateTime,
}

/// Either kind of stored reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationLog {
    /// A chemical reservation.
    Chemical(ChemicalLog),
    /// An equipment reservation.
    Equipment(EquipmentLog),
}

impl ReservationLog {
    /// Returns the log's identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Chemical(log) => log.id,
            Self::Equipment(log) => log.id,
        }
    }

    /// Returns the reserved quantity.
    #[must_use]
    pub const fn qty(&self) -> i64 {
        match self {
            Self::Chemical(log) => log.qty,
            Self::Equipment(log) => log.qty,
        }
    }
}
