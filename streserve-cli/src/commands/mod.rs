//! CLI command implementations.
//!
//! - `init`: Create the data directory, database and optional config
//! - `import`: Load chemicals or equipment from a CSV file
//! - `list`: List inventory or logs as a table, JSON, CSV or TSV
//! - `show`: Show a single record as JSON
//! - `reserve`: Reserve a chemical or equipment for a group
//! - `request`: Route a path and parameters the way a client would
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod import;
pub mod init;
pub mod list;
pub mod request;
pub mod reserve;
pub mod show;

pub use completions::CompletionsCommand;
pub use import::ImportCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use request::RequestCommand;
pub use reserve::{ReserveChemicalCommand, ReserveEquipmentCommand};
pub use show::ShowCommand;
