//! Configuration schema definitions.
//!
//! This module defines the configuration structure for streserve. Every
//! field is optional so that partial configurations from several sources
//! can be merged.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::output::LinkStyle;
use crate::reservation::GroupCode;

/// Default lock wait when no source sets `maximum_lock_wait_seconds`.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use streserve::config::Config;
/// use streserve::output::LinkStyle;
///
/// let config = Config {
///     link_style: Some(LinkStyle::Embed),
///     min_group_code: Some(20190000),
///     ..Default::default()
/// };
/// assert_eq!(config.group_code_minimum(), 20190000);
/// assert_eq!(config.link_style(), LinkStyle::Embed);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// How related entities and logs are rendered.
    pub link_style: Option<LinkStyle>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Lowest accepted group code. May raise, never lower, the built-in threshold.
    pub min_group_code: Option<i64>,
}

impl Config {
    /// Returns the effective lowest accepted group code.
    #[must_use]
    pub fn group_code_minimum(&self) -> i64 {
        self.min_group_code
            .unwrap_or(GroupCode::MIN)
            .max(GroupCode::MIN)
    }

    /// Returns the effective link style, defaulting to links.
    #[must_use]
    pub fn link_style(&self) -> LinkStyle {
        self.link_style.unwrap_or_default()
    }

    /// Returns the effective output format, defaulting to a table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Table)
    }

    /// Returns how long to wait for the database write lock.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns `true` if the database must already exist.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use streserve::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
