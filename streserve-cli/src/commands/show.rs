//! Show command implementation.
//!
//! Prints one chemical, piece of equipment or log as pretty JSON, rendered
//! the same way the request router renders it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, write_json, GlobalOptions};
use clap::{Args, ValueEnum};
use streserve::output::{LinkStyle, Presenter};

/// Show a single record.
#[derive(Args)]
pub struct ShowCommand {
    /// Kind of record
    #[arg(value_enum)]
    pub kind: ShowKind,

    /// Record identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Nest related records instead of linking to them
    #[arg(long)]
    pub embed: bool,
}

/// Record kinds that can be shown.
#[derive(Clone, Copy, ValueEnum)]
pub enum ShowKind {
    /// A chemical
    Chemical,
    /// A piece of equipment
    Equipment,
    /// A chemical reservation log
    ChemicalLog,
    /// An equipment reservation log
    EquipmentLog,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let style = if self.embed {
            LinkStyle::Embed
        } else {
            config.link_style()
        };
        let presenter = Presenter::new(db.connection(), style);

        match self.kind {
            ShowKind::Chemical => write_json(&presenter.chemical_by_id(self.id)?),
            ShowKind::Equipment => write_json(&presenter.equipment_by_id(self.id)?),
            ShowKind::ChemicalLog => write_json(&presenter.chemical_log_by_id(self.id)?),
            ShowKind::EquipmentLog => write_json(&presenter.equipment_log_by_id(self.id)?),
        }
    }
}
