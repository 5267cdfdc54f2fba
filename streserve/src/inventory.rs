//! Inventory entity types.
//!
//! Chemicals and equipment are stored in arena-style tables keyed by an
//! integer id. Entities never hold their logs; relationships are resolved
//! by looking logs up through the store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical state of a chemical, which fixes its unit of measure.
///
/// On the wire the state is a boolean: `true` for solids (grams) and
/// `false` for liquids (millilitres).
///
/// # Examples
///
/// ```
/// use streserve::ChemicalState;
///
/// assert_eq!(ChemicalState::from(true), ChemicalState::Solid);
/// assert_eq!(ChemicalState::Liquid.unit(), "mL");
/// assert!(!bool::from(ChemicalState::Liquid));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum ChemicalState {
    /// Measured in grams.
    Solid,
    /// Measured in millilitres.
    Liquid,
}

impl ChemicalState {
    /// Returns the unit symbol quantities of this state are counted in.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Solid => "g",
            Self::Liquid => "mL",
        }
    }

    /// Returns `true` for solids.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }
}

impl From<bool> for ChemicalState {
    fn from(solid: bool) -> Self {
        if solid {
            Self::Solid
        } else {
            Self::Liquid
        }
    }
}

impl From<ChemicalState> for bool {
    fn from(state: ChemicalState) -> Self {
        state.is_solid()
    }
}

impl fmt::Display for ChemicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Liquid => write!(f, "liquid"),
        }
    }
}

/// A chemical held in the laboratory stockroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chemical {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Physical state; decides whether `qty` is grams or millilitres.
    pub state: ChemicalState,
    /// Amount on hand. Never negative.
    pub qty: i64,
}

/// Equipment, glassware or supplies held in the laboratory.
///
/// For consumable equipment `qty` is an informational count only: the
/// reservation engine never checks or debits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether stock is treated as unlimited.
    pub is_consumable: bool,
    /// Units on hand. Never negative for non-consumable equipment.
    pub qty: i64,
}

impl Equipment {
    /// Returns `true` if reservations are checked against and debited from `qty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use streserve::Equipment;
    ///
    /// let dish = Equipment { id: 1001, name: "Petri dish".into(), is_consumable: false, qty: 15 };
    /// assert!(dish.tracks_stock());
    /// ```
    #[must_use]
    pub const fn tracks_stock(&self) -> bool {
        !self.is_consumable
    }
}

/// A chemical that has not been stored yet.
///
/// `id` may be given explicitly to preserve identifiers from an import;
/// when `None` the store assigns the next free id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChemical {
    /// Requested identifier, if any.
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Physical state.
    pub state: ChemicalState,
    /// Initial amount on hand.
    pub qty: i64,
}

impl NewChemical {
    /// Creates a new chemical record with a store-assigned id.
    #[must_use]
    pub fn new(name: impl Into<String>, state: ChemicalState, qty: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            state,
            qty,
        }
    }

    /// Requests a specific identifier.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Equipment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEquipment {
    /// Requested identifier, if any.
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Whether stock is treated as unlimited.
    pub is_consumable: bool,
    /// Initial units on hand.
    pub qty: i64,
}

impl NewEquipment {
    /// Creates a new equipment record with a store-assigned id.
    #[must_use]
    pub fn new(name: impl Into<String>, is_consumable: bool, qty: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            is_consumable,
            qty,
        }
    }

    /// Requests a specific identifier.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_bool() {
        assert_eq!(ChemicalState::from(true), ChemicalState::Solid);
        assert_eq!(ChemicalState::from(false), ChemicalState::Liquid);
    }

    #[test]
    fn test_state_units() {
        assert_eq!(ChemicalState::Solid.unit(), "g");
        assert_eq!(ChemicalState::Liquid.unit(), "mL");
    }

    #[test]
    fn test_state_serializes_as_bool() {
        let json = serde_json::to_string(&ChemicalState::Solid).unwrap();
        assert_eq!(json, "true");
        let state: ChemicalState = serde_json::from_str("false").unwrap();
        assert_eq!(state, ChemicalState::Liquid);
    }

    #[test]
    fn test_consumable_does_not_track_stock() {
        let gloves = Equipment {
            id: 7,
            name: "Nitrile gloves".to_string(),
            is_consumable: true,
            qty: 0,
        };
        assert!(!gloves.tracks_stock());
    }

    #[test]
    fn test_new_chemical_with_id() {
        let chem = NewChemical::new("Sodium chloride", ChemicalState::Solid, 200).with_id(1);
        assert_eq!(chem.id, Some(1));
        assert_eq!(chem.qty, 200);
    }
}
