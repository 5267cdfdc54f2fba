//! Configuration system for streserve.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`STRESERVE_*`)
//! 3. Private project config (`streserve.local.yaml`)
//! 4. Project config (`streserve.yaml`)
//! 5. User config (`<data_dir>/config.yaml`)
//! 6. Built-in defaults
//!
//! `min_group_code` is the exception: every source can raise it, none can
//! lower it.
//!
//! # Examples
//!
//! ```no_run
//! use streserve::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/lab"))
//!     .build()
//!     .unwrap();
//!
//! println!("Group codes start at {}", config.group_code_minimum());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
