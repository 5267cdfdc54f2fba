//! Rendering entities and logs against the store.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::Result;
use crate::inventory::{Chemical, Equipment};
use crate::reservation::{ChemicalLog, EquipmentLog, ReservationLog};

use super::links::{chemical_log_path, chemical_path, equipment_log_path, equipment_path};
use super::views::{
    ChemicalLogView, ChemicalView, EquipmentLogView, EquipmentView, LogView, Related,
};
use super::LinkStyle;

/// Renders records into views, resolving relationships through the store.
///
/// # Examples
///
/// ```no_run
/// use streserve::database::{Database, DatabaseConfig};
/// use streserve::output::{LinkStyle, Presenter};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/streserve.db")).unwrap();
/// let presenter = Presenter::new(db.connection(), LinkStyle::Embed);
/// let chemicals = presenter.chemicals().unwrap();
/// println!("{}", serde_json::to_string_pretty(&chemicals).unwrap());
/// ```
pub struct Presenter<'a> {
    conn: &'a Connection,
    style: LinkStyle,
}

impl<'a> Presenter<'a> {
    /// Creates a presenter reading from `conn`.
    #[must_use]
    pub const fn new(conn: &'a Connection, style: LinkStyle) -> Self {
        Self { conn, style }
    }

    /// Returns the link style in use.
    #[must_use]
    pub const fn style(&self) -> LinkStyle {
        self.style
    }

    /// Renders every chemical, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if a store query fails.
    pub fn chemicals(&self) -> Result<Vec<ChemicalView>> {
        Database::list_chemicals(self.conn)?
            .iter()
            .map(|chemical| self.chemical(chemical))
            .collect()
    }

    /// Renders the chemical with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if it does not exist.
    pub fn chemical_by_id(&self, id: i64) -> Result<ChemicalView> {
        self.chemical(&Database::require_chemical(self.conn, id)?)
    }

    /// Renders one chemical.
    ///
    /// # Errors
    ///
    /// Returns an error if its logs cannot be read.
    pub fn chemical(&self, chemical: &Chemical) -> Result<ChemicalView> {
        let logs = Database::list_logs_for_chemical(self.conn, chemical.id)?
            .iter()
            .map(|log| match self.style {
                LinkStyle::Link => Ok(Related::Link(chemical_log_path(log.id))),
                LinkStyle::Embed => Ok(Related::Embedded(Box::new(
                    self.shallow(LinkStyle::Link).chemical_log(log)?,
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ChemicalView {
            id: chemical.id,
            name: chemical.name.clone(),
            state: chemical.state,
            unit: chemical.state.unit(),
            qty: chemical.qty,
            logs,
        })
    }

    /// Renders all equipment, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if a store query fails.
    pub fn equipment_list(&self) -> Result<Vec<EquipmentView>> {
        Database::list_equipment(self.conn)?
            .iter()
            .map(|equipment| self.equipment(equipment))
            .collect()
    }

    /// Renders the equipment with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if it does not exist.
    pub fn equipment_by_id(&self, id: i64) -> Result<EquipmentView> {
        self.equipment(&Database::require_equipment(self.conn, id)?)
    }

    /// Renders one piece of equipment.
    ///
    /// # Errors
    ///
    /// Returns an error if its logs cannot be read.
    pub fn equipment(&self, equipment: &Equipment) -> Result<EquipmentView> {
        let logs = Database::list_logs_for_equipment(self.conn, equipment.id)?
            .iter()
            .map(|log| match self.style {
                LinkStyle::Link => Ok(Related::Link(equipment_log_path(log.id))),
                LinkStyle::Embed => Ok(Related::Embedded(Box::new(
                    self.shallow(LinkStyle::Link).equipment_log(log)?,
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EquipmentView {
            id: equipment.id,
            name: equipment.name.clone(),
            is_consumable: equipment.is_consumable,
            qty: equipment.qty,
            logs,
        })
    }

    /// Renders every chemical log, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if a store query fails.
    pub fn chemical_logs(&self) -> Result<Vec<ChemicalLogView>> {
        Database::list_chemical_logs(self.conn)?
            .iter()
            .map(|log| self.chemical_log(log))
            .collect()
    }

    /// Renders the chemical log with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if it does not exist.
    pub fn chemical_log_by_id(&self, id: i64) -> Result<ChemicalLogView> {
        self.chemical_log(&Database::get_chemical_log(self.conn, id)?)
    }

    /// Renders one chemical log.
    ///
    /// A log whose chemical is gone still renders, with a link.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn chemical_log(&self, log: &ChemicalLog) -> Result<ChemicalLogView> {
        let chemical = match self.style {
            LinkStyle::Embed => Database::get_chemical(self.conn, log.chemical_id)?
                .map(|chemical| self.shallow(LinkStyle::Link).chemical(&chemical))
                .transpose()?
                .map(|view| Related::Embedded(Box::new(view))),
            LinkStyle::Link => None,
        }
        .unwrap_or_else(|| Related::Link(chemical_path(log.chemical_id)));

        Ok(chemical_log_view(log, chemical))
    }

    /// Renders every equipment log, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if a store query fails.
    pub fn equipment_logs(&self) -> Result<Vec<EquipmentLogView>> {
        Database::list_equipment_logs(self.conn)?
            .iter()
            .map(|log| self.equipment_log(log))
            .collect()
    }

    /// Renders the equipment log with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if it does not exist.
    pub fn equipment_log_by_id(&self, id: i64) -> Result<EquipmentLogView> {
        self.equipment_log(&Database::get_equipment_log(self.conn, id)?)
    }

    /// Renders one equipment log.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn equipment_log(&self, log: &EquipmentLog) -> Result<EquipmentLogView> {
        let equipment = match self.style {
            LinkStyle::Embed => Database::get_equipment(self.conn, log.equipment_id)?
                .map(|equipment| self.shallow(LinkStyle::Link).equipment(&equipment))
                .transpose()?
                .map(|view| Related::Embedded(Box::new(view))),
            LinkStyle::Link => None,
        }
        .unwrap_or_else(|| Related::Link(equipment_path(log.equipment_id)));

        Ok(equipment_log_view(log, equipment))
    }

    /// Renders either kind of log.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn log(&self, log: &ReservationLog) -> Result<LogView> {
        Ok(match log {
            ReservationLog::Chemical(log) => LogView::Chemical(self.chemical_log(log)?),
            ReservationLog::Equipment(log) => LogView::Equipment(self.equipment_log(log)?),
        })
    }

    /// Renders a log whose write has already committed.
    ///
    /// If the store cannot be read, relationships fall back to links.
    #[must_use]
    pub fn committed_log(&self, stored: &ReservationLog) -> LogView {
        self.log(stored).unwrap_or_else(|err| {
            log::warn!("Rendering reservation log {} with links: {err}", stored.id());
            match stored {
                ReservationLog::Chemical(entry) => LogView::Chemical(chemical_log_view(
                    entry,
                    Related::Link(chemical_path(entry.chemical_id)),
                )),
                ReservationLog::Equipment(entry) => LogView::Equipment(equipment_log_view(
                    entry,
                    Related::Link(equipment_path(entry.equipment_id)),
                )),
            }
        })
    }

    const fn shallow(&self, style: LinkStyle) -> Self {
        Self {
            conn: self.conn,
            style,
        }
    }
}

fn chemical_log_view(log: &ChemicalLog, chemical: Related<ChemicalView>) -> ChemicalLogView {
    ChemicalLogView {
        id: log.id,
        group_code: log.group_code,
        chemical_id: log.chemical_id,
        chemical,
        qty: log.qty,
        date_procured: log.date_procured,
    }
}

fn equipment_log_view(log: &EquipmentLog, equipment: Related<EquipmentView>) -> EquipmentLogView {
    EquipmentLogView {
        id: log.id,
        group_code: log.group_code,
        equipment_id: log.equipment_id,
        equipment,
        qty: log.qty,
        date_procured: log.date_procured,
        date_return: log.date_return,
    }
}
