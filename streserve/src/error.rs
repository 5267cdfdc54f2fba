//! Error types for the streserve library.
//!
//! This module provides the error hierarchy for all operations in the
//! streserve library, using `thiserror` for ergonomic error handling.
//! Reservation rejections and storage faults share one enum so that the
//! engine can short-circuit with `?` while callers still tell them apart
//! through [`Error::kind`] and [`Error::is_rejection`].

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a streserve error.
///
/// # Examples
///
/// ```
/// use streserve::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the streserve library.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested entity, log or route does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A date argument was not a valid `YYYYMMDD` calendar date.
    #[error("invalid date for '{field}': {value:?} ({reason})")]
    InvalidDate {
        /// The request parameter carrying the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// One or more required arguments were absent.
    #[error("missing argument(s): {}", .arguments.join(", "))]
    MissingArgument {
        /// Names of the absent parameters, in request order.
        arguments: Vec<String>,
    },

    /// The reservation would drive stock below zero.
    #[error("insufficient stock: {requested} requested but only {available} available")]
    InsufficientStock {
        /// Quantity currently on hand.
        available: i64,
        /// Quantity asked for.
        requested: i64,
    },

    /// The requested quantity was negative.
    #[error("invalid quantity {qty}: quantity must not be negative")]
    InvalidQuantity {
        /// The offending quantity.
        qty: i64,
    },

    /// The group code is below the recognized threshold.
    #[error("unrecognized group code {code}: group codes start at {minimum}")]
    UnrecognizedGroupCode {
        /// The offending group code.
        code: i64,
        /// The lowest accepted group code.
        minimum: i64,
    },

    /// A validation error occurred (malformed argument or configuration value).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A serialization error occurred while rendering a representation.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Returns the stable name of this error's kind.
    ///
    /// This is the value reported in the `kind` field of a tagged
    /// reservation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use streserve::Error;
    ///
    /// let err = Error::InvalidQuantity { qty: -1 };
    /// assert_eq!(err.kind(), "InvalidQuantity");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::InvalidDate { .. } => "InvalidDate",
            Self::MissingArgument { .. } => "MissingArgument",
            Self::InsufficientStock { .. } => "InsufficientStock",
            Self::InvalidQuantity { .. } => "InvalidQuantity",
            Self::UnrecognizedGroupCode { .. } => "UnrecognizedGroupCode",
            Self::Validation { .. } => "Validation",
            Self::Database(_) => "Database",
            Self::Configuration(_) => "Configuration",
            Self::Serialization(_) => "Serialization",
            Self::Io(_) => "Io",
            Self::LockTimeout { .. } => "LockTimeout",
            Self::DataDirectoryNotFound { .. } => "DataDirectoryNotFound",
            Self::UnsupportedSchemaVersion { .. } => "UnsupportedSchemaVersion",
        }
    }

    /// Check if this error is a request rejection rather than a fault.
    ///
    /// Rejections are the outcome of validating a request against the
    /// current inventory; they leave every table untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use streserve::Error;
    ///
    /// let err = Error::InsufficientStock { available: 5, requested: 10 };
    /// assert!(err.is_rejection());
    ///
    /// let err = Error::LockTimeout { seconds: 5 };
    /// assert!(!err.is_rejection());
    /// ```
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidDate { .. }
                | Self::MissingArgument { .. }
                | Self::InsufficientStock { .. }
                | Self::InvalidQuantity { .. }
                | Self::UnrecognizedGroupCode { .. }
                | Self::Validation { .. }
        )
    }

    /// Check if error indicates a missing entity or route.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Shorthand for a [`Error::NotFound`] naming a resource.
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}
