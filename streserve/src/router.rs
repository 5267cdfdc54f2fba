//! In-process request routing.
//!
//! Maps HTTP-style paths and flat string parameters onto the store,
//! presenter and reservation engine, answering with a status code and a
//! JSON body. There is no network listener; callers hand requests in
//! directly.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::operations::{
    reserve_chemical, reserve_equipment, ExecutionResult, ReservationOutcome,
    ReserveChemicalRequest, ReserveEquipmentRequest,
};
use crate::output::Presenter;

/// Request succeeded.
pub const STATUS_OK: u16 = 200;

/// Request was rejected.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Route or record does not exist.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Storage or internal failure.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// A resolved route.
///
/// # Examples
///
/// ```
/// use streserve::router::Route;
///
/// assert_eq!(Route::parse("/chemicals/1/reserve"), Some(Route::ReserveChemical(1)));
/// assert_eq!(Route::parse("/equipment/logs/"), Some(Route::EquipmentLogs));
/// assert_eq!(Route::parse("/reagents/"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Health,
    /// `/chemicals/`
    Chemicals,
    /// `/chemicals/{id}/`
    Chemical(i64),
    /// `/chemicals/{id}/reserve/`
    ReserveChemical(i64),
    /// `/chemicals/logs/`
    ChemicalLogs,
    /// `/chemicals/logs/{id}`
    ChemicalLog(i64),
    /// `/equipment/`
    EquipmentList,
    /// `/equipment/{id}/`
    Equipment(i64),
    /// `/equipment/{id}/reserve/`
    ReserveEquipment(i64),
    /// `/equipment/logs/`
    EquipmentLogs,
    /// `/equipment/logs/{id}`
    EquipmentLog(i64),
}

impl Route {
    /// Resolves `path`. Leading and trailing slashes are optional.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::Health),
            ["chemicals"] => Some(Self::Chemicals),
            ["chemicals", "logs"] => Some(Self::ChemicalLogs),
            ["chemicals", "logs", id] => parse_id(id).map(Self::ChemicalLog),
            ["chemicals", id] => parse_id(id).map(Self::Chemical),
            ["chemicals", id, "reserve"] => parse_id(id).map(Self::ReserveChemical),
            ["equipment"] => Some(Self::EquipmentList),
            ["equipment", "logs"] => Some(Self::EquipmentLogs),
            ["equipment", "logs", id] => parse_id(id).map(Self::EquipmentLog),
            ["equipment", id] => parse_id(id).map(Self::Equipment),
            ["equipment", id, "reserve"] => parse_id(id).map(Self::ReserveEquipment),
            _ => None,
        }
    }
}

fn parse_id(segment: &str) -> Option<i64> {
    segment.parse().ok()
}

/// Splits `target` into a path and its query parameters.
///
/// Values are taken verbatim; no percent-decoding is applied.
///
/// # Examples
///
/// ```
/// let (path, params) = streserve::router::split_target("/chemicals/1/reserve/?qty=50&groupcode=20180105");
/// assert_eq!(path, "/chemicals/1/reserve/");
/// assert_eq!(params["qty"], "50");
/// ```
#[must_use]
pub fn split_target(target: &str) -> (&str, HashMap<String, String>) {
    let Some((path, query)) = target.split_once('?') else {
        return (target, HashMap::new());
    };

    let params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.to_string(), value.to_string())
        })
        .collect();

    (path, params)
}

/// A routed response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP-style status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    fn from_error(err: &Error) -> Self {
        let status = if err.is_not_found() {
            STATUS_NOT_FOUND
        } else if err.is_rejection() {
            STATUS_BAD_REQUEST
        } else {
            STATUS_INTERNAL_ERROR
        };

        Self {
            status,
            body: json!({
                "status": "Error",
                "kind": err.kind(),
                "error": err.to_string(),
            }),
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Dispatches requests against an open store.
///
/// # Examples
///
/// ```no_run
/// use std::collections::HashMap;
///
/// use streserve::config::Config;
/// use streserve::database::{Database, DatabaseConfig};
/// use streserve::router::Router;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/streserve.db")).unwrap();
/// let config = Config::default();
/// let mut router = Router::new(&mut db, &config);
///
/// let response = router.handle("/chemicals/", &HashMap::new());
/// assert_eq!(response.status, 200);
/// ```
pub struct Router<'a> {
    db: &'a mut Database,
    config: &'a Config,
}

impl<'a> Router<'a> {
    /// Creates a router over `db`.
    #[must_use]
    pub fn new(db: &'a mut Database, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Handles one request.
    ///
    /// Never fails: every error is folded into the response.
    pub fn handle(&mut self, path: &str, params: &HashMap<String, String>) -> Response {
        let Some(route) = Route::parse(path) else {
            log::debug!("No route for {path}");
            return Response::from_error(&Error::not_found(format!("route {path}")));
        };

        match self.dispatch(route, params) {
            Ok(response) => response,
            Err(err) => {
                if !err.is_rejection() {
                    log::error!("{path}: {err}");
                }
                Response::from_error(&err)
            }
        }
    }

    fn dispatch(&mut self, route: Route, params: &HashMap<String, String>) -> Result<Response> {
        let presenter = Presenter::new(self.db.connection(), self.config.link_style());

        let body = match route {
            Route::Health => json!({
                "status": "OK",
                "version": env!("CARGO_PKG_VERSION"),
            }),
            Route::Chemicals => serde_json::to_value(presenter.chemicals()?)?,
            Route::Chemical(id) => serde_json::to_value(presenter.chemical_by_id(id)?)?,
            Route::ChemicalLogs => serde_json::to_value(presenter.chemical_logs()?)?,
            Route::ChemicalLog(id) => serde_json::to_value(presenter.chemical_log_by_id(id)?)?,
            Route::EquipmentList => serde_json::to_value(presenter.equipment_list()?)?,
            Route::Equipment(id) => serde_json::to_value(presenter.equipment_by_id(id)?)?,
            Route::EquipmentLogs => serde_json::to_value(presenter.equipment_logs()?)?,
            Route::EquipmentLog(id) => {
                serde_json::to_value(presenter.equipment_log_by_id(id)?)?
            }
            Route::ReserveChemical(id) => {
                let request = ReserveChemicalRequest::from_params(id, params);
                let result = reserve_chemical(self.db, &request, self.config, false);
                return self.reservation(result);
            }
            Route::ReserveEquipment(id) => {
                let request = ReserveEquipmentRequest::from_params(id, params);
                let result = reserve_equipment(self.db, &request, self.config, false);
                return self.reservation(result);
            }
        };

        Ok(Response::ok(body))
    }

    fn reservation(&self, result: Result<ExecutionResult>) -> Result<Response> {
        let presenter = Presenter::new(self.db.connection(), self.config.link_style());
        let rendered = result.and_then(|executed| match executed.log {
            Some(stored) => Ok(presenter.committed_log(&stored)),
            None => Err(Error::Validation {
                field: "dry_run".to_string(),
                message: "a dry run stores no log".to_string(),
            }),
        });

        let status = match &rendered {
            Ok(_) => STATUS_OK,
            Err(err) if err.is_not_found() => STATUS_NOT_FOUND,
            Err(_) => STATUS_BAD_REQUEST,
        };
        let outcome = ReservationOutcome::from_result(rendered)?;

        Ok(Response {
            status,
            body: serde_json::to_value(&outcome)?,
        })
    }
}
