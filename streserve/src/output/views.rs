//! Serializable views of entities and logs.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::inventory::ChemicalState;
use crate::reservation::GroupCode;

/// A relationship field: either a link path or the embedded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Related<T> {
    /// Addressable path of the related record.
    Link(String),
    /// The related record itself.
    Embedded(Box<T>),
}

impl<T> Related<T> {
    /// Returns the link path, if this is a link.
    #[must_use]
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Self::Link(path) => Some(path),
            Self::Embedded(_) => None,
        }
    }

    /// Returns the embedded record, if this is embedded.
    #[must_use]
    pub fn as_embedded(&self) -> Option<&T> {
        match self {
            Self::Link(_) => None,
            Self::Embedded(record) => Some(record),
        }
    }
}

/// Rendered chemical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalView {
    /// Identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// `true` for solids.
    pub state: ChemicalState,
    /// `g` or `mL`.
    pub unit: &'static str,
    /// Amount on hand.
    pub qty: i64,
    /// Reservations of this chemical.
    pub logs: Vec<Related<ChemicalLogView>>,
}

/// Rendered equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentView {
    /// Identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether stock is unlimited.
    pub is_consumable: bool,
    /// Units on hand.
    pub qty: i64,
    /// Reservations of this equipment.
    pub logs: Vec<Related<EquipmentLogView>>,
}

/// Rendered chemical log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalLogView {
    /// Identifier.
    pub id: i64,
    /// Reserving group.
    pub group_code: GroupCode,
    /// Identifier of the reserved chemical.
    pub chemical_id: i64,
    /// The reserved chemical.
    pub chemical: Related<ChemicalView>,
    /// Amount reserved.
    pub qty: i64,
    /// Start of the procurement day.
    pub date_procured: NaiveDateTime,
}

/// Rendered equipment log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentLogView {
    /// Identifier.
    pub id: i64,
    /// Reserving group.
    pub group_code: GroupCode,
    /// Identifier of the reserved equipment.
    pub equipment_id: i64,
    /// The reserved equipment.
    pub equipment: Related<EquipmentView>,
    /// Units reserved.
    pub qty: i64,
    /// Start of the procurement day.
    pub date_procured: NaiveDateTime,
    /// End of the return day.
    pub date_return: NaiveDateTime,
}

/// Either kind of rendered log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LogView {
    /// A chemical log.
    Chemical(ChemicalLogView),
    /// An equipment log.
    Equipment(EquipmentLogView),
}
