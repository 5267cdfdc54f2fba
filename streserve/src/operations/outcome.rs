//! Tagged reservation results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::LogView;

/// The outcome of a reservation request as reported to callers.
///
/// Serializes with a `status` tag of `"OK"` or `"Error"`.
///
/// # Examples
///
/// ```
/// use streserve::operations::ReservationOutcome;
/// use streserve::Error;
///
/// let outcome = ReservationOutcome::rejected(&Error::InvalidQuantity { qty: -1 });
/// let json = serde_json::to_value(&outcome).unwrap();
/// assert_eq!(json["status"], "Error");
/// assert_eq!(json["kind"], "InvalidQuantity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ReservationOutcome {
    /// The reservation was stored.
    #[serde(rename = "OK")]
    Ok {
        /// The stored log.
        log: LogView,
    },
    /// The reservation was rejected and nothing changed.
    Error {
        /// Stable name of the rejection.
        kind: &'static str,
        /// Human-readable message.
        error: String,
    },
}

impl ReservationOutcome {
    /// Builds the error outcome for `err`.
    #[must_use]
    pub fn rejected(err: &Error) -> Self {
        Self::Error {
            kind: err.kind(),
            error: err.to_string(),
        }
    }

    /// Folds a reservation result into an outcome.
    ///
    /// Rejections become [`ReservationOutcome::Error`]; faults stay errors.
    ///
    /// # Errors
    ///
    /// Returns `result`'s error if it is not a rejection.
    pub fn from_result(result: Result<LogView>) -> Result<Self> {
        match result {
            Ok(log) => Ok(Self::Ok { log }),
            Err(err) if err.is_rejection() => Ok(Self::rejected(&err)),
            Err(err) => Err(err),
        }
    }

    /// Returns `true` if the reservation was stored.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}
