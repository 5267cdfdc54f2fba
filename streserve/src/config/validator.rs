//! Configuration validation.
//!
//! This module checks configuration values after parsing, before any of
//! them reach the database or the reservation engine.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::reservation::GroupCode;

/// Largest group code expressible in the `BBBBSSNN` form.
pub const MAX_GROUP_CODE: i64 = 99_999_999;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use streserve::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config, false).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to validate
    /// * `is_project_file` - Whether this came from a `streserve.yaml` or
    ///   `streserve.local.yaml` file (affects which fields are allowed)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config, is_project_file: bool) -> Result<()> {
        if config.disable_autoinit.is_some() && is_project_file {
            return Err(Error::Validation {
                field: "disable_autoinit".into(),
                message: "disable_autoinit is only valid in the user configuration".into(),
            });
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(minimum) = config.min_group_code {
            Self::validate_min_group_code(minimum)?;
        }

        Ok(())
    }

    /// Validate the configured group code threshold.
    ///
    /// The threshold may be raised but never lowered below
    /// [`GroupCode::MIN`], and must still be an eight-digit code.
    fn validate_min_group_code(minimum: i64) -> Result<()> {
        if minimum < GroupCode::MIN {
            return Err(Error::Validation {
                field: "min_group_code".into(),
                message: format!("Cannot be lower than {}", GroupCode::MIN),
            });
        }

        if minimum > MAX_GROUP_CODE {
            return Err(Error::Validation {
                field: "min_group_code".into(),
                message: format!("Cannot exceed {MAX_GROUP_CODE}"),
            });
        }

        Ok(())
    }
}
