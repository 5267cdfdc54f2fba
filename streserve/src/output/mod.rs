//! Presentation of inventory and logs.
//!
//! Entities and logs are rendered into serializable views. Relationship
//! fields resolve either to link paths or to embedded objects depending on
//! the [`LinkStyle`]. Embedding is one level deep: an embedded object
//! always links its own relations, so rendering never recurses.

mod links;
mod presenter;
mod views;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use links::{
    chemical_log_path, chemical_path, equipment_log_path, equipment_path, CHEMICALS_PATH,
    CHEMICAL_LOGS_PATH, EQUIPMENT_LOGS_PATH, EQUIPMENT_PATH,
};
pub use presenter::Presenter;
pub use views::{ChemicalLogView, ChemicalView, EquipmentLogView, EquipmentView, LogView, Related};

/// How relationship fields are rendered.
///
/// # Examples
///
/// ```
/// use streserve::output::LinkStyle;
///
/// assert_eq!(LinkStyle::default(), LinkStyle::Link);
/// assert_eq!("embed".parse::<LinkStyle>().unwrap(), LinkStyle::Embed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Related records appear as addressable paths such as `/chemicals/1/`.
    #[default]
    Link,
    /// Related records appear as nested objects.
    Embed,
}

impl fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => write!(f, "link"),
            Self::Embed => write!(f, "embed"),
        }
    }
}

impl FromStr for LinkStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "link" => Ok(Self::Link),
            "embed" => Ok(Self::Embed),
            _ => Err(format!("invalid link style: {s} (expected link or embed)")),
        }
    }
}
