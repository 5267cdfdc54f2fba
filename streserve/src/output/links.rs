//! Addressable paths for entities and logs.
//!
//! Entity paths end in a slash; log paths do not.

/// Collection path for chemicals.
pub const CHEMICALS_PATH: &str = "/chemicals/";

/// Collection path for equipment.
pub const EQUIPMENT_PATH: &str = "/equipment/";

/// Collection path for chemical logs.
pub const CHEMICAL_LOGS_PATH: &str = "/chemicals/logs/";

/// Collection path for equipment logs.
pub const EQUIPMENT_LOGS_PATH: &str = "/equipment/logs/";

/// Path of one chemical.
///
/// # Examples
///
/// ```
/// assert_eq!(streserve::output::chemical_path(1), "/chemicals/1/");
/// ```
#[must_use]
pub fn chemical_path(id: i64) -> String {
    format!("{CHEMICALS_PATH}{id}/")
}

/// Path of one piece of equipment.
#[must_use]
pub fn equipment_path(id: i64) -> String {
    format!("{EQUIPMENT_PATH}{id}/")
}

/// Path of one chemical log.
///
/// # Examples
///
/// ```
/// assert_eq!(streserve::output::chemical_log_path(7), "/chemicals/logs/7");
/// ```
#[must_use]
pub fn chemical_log_path(id: i64) -> String {
    format!("{CHEMICAL_LOGS_PATH}{id}")
}

/// Path of one equipment log.
#[must_use]
pub fn equipment_log_path(id: i64) -> String {
    format!("{EQUIPMENT_LOGS_PATH}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(chemical_path(3), "/chemicals/3/");
        assert_eq!(equipment_path(1001), "/equipment/1001/");
        assert_eq!(chemical_log_path(7), "/chemicals/logs/7");
        assert_eq!(equipment_log_path(2), "/equipment/logs/2");
    }
}
