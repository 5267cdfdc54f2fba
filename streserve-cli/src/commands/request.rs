//! Request command implementation.
//!
//! Drives the request router with a path and flat string parameters, the
//! way a client would, and prints the response body.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, write_json, GlobalOptions};
use clap::Args;
use streserve::router::{split_target, Router};

/// Route a request and print the response body.
#[derive(Args)]
pub struct RequestCommand {
    /// Request path, optionally with a query string (e.g. `/chemicals/1/reserve/?qty=5`)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Request parameter as KEY=VALUE (repeatable, overrides the query string)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Print the response status on stderr
    #[arg(long)]
    pub show_status: bool,
}

impl RequestCommand {
    /// Execute the request command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let (path, mut params) = split_target(&self.target);
        params.extend(self.params);

        let response = Router::new(&mut db, &config).handle(path, &params);

        if self.show_status {
            eprintln!("{}", response.status);
        }
        write_json(&response.body)?;

        if response.is_success() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "request to {path} failed with status {}",
                response.status
            )))
        }
    }
}

/// Parses a `KEY=VALUE` pair. The value may itself contain `=`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
