//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `STRESERVE_*` environment variables
//! that override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::output::LinkStyle;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use streserve::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `STRESERVE_*` variables and applies them with higher
    /// precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric group code, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("STRESERVE_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("STRESERVE_DISABLE_AUTOINIT", &val)?);
        }

        if let Ok(seconds) = env::var("STRESERVE_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "STRESERVE_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(style) = env::var("STRESERVE_LINK_STYLE") {
            config.link_style = Some(style.parse::<LinkStyle>().map_err(|message| {
                Error::Validation {
                    field: "STRESERVE_LINK_STYLE".into(),
                    message,
                }
            })?);
        }

        if let Ok(format) = env::var("STRESERVE_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: "STRESERVE_OUTPUT_FORMAT".into(),
                    message,
                }
            })?);
        }

        if let Ok(code) = env::var("STRESERVE_MIN_GROUP_CODE") {
            config.min_group_code = Some(code.trim().parse().map_err(|_| Error::Validation {
                field: "STRESERVE_MIN_GROUP_CODE".into(),
                message: "Must be an integer group code".into(),
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
