//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the siteupdate binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use crate::error::{Result, SiteUpdateError};
use crate::UpdateOptions;

/// Website update command-line interface.
#[derive(Parser, Debug)]
#[command(name = "siteupdate", about = "Update website records", version)]
pub struct Cli {
    /// Output results as JSON instead of text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL that overrides the origin and configured base URL.
    #[arg(long, global = true, env = "SITEUPDATE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Do not ask the remote service to send a notification.
    #[arg(long, global = true, default_value = "false")]
    pub no_notify: bool,

    /// Log request details to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update fields of a website.
    Update {
        /// The website identifier.
        identifier: String,

        /// Field to set, as key=value. The value is parsed as JSON when
        /// possible, otherwise used as a string.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, Value)>,

        /// JSON object of updates. `--set` entries override its keys.
        #[arg(long, value_name = "JSON")]
        updates: Option<String>,
    },

    /// Send a whole website document from a JSON file.
    Apply {
        /// Path of the document (defaults to website-data.json).
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Per-call options derived from the global flags.
    pub fn options(&self) -> UpdateOptions {
        UpdateOptions {
            send_notification: !self.no_notify,
            endpoint_override: self.endpoint.clone(),
        }
    }
}

/// Merge `--updates` and `--set` into one update map.
///
/// # Errors
///
/// Returns an error if `updates` is not a JSON object.
pub fn build_updates(
    updates: Option<&str>,
    set: &[(String, Value)],
) -> Result<Map<String, Value>> {
    let mut merged = match updates {
        Some(raw) => match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            _ => {
                return Err(SiteUpdateError::InvalidUpdates(
                    "--updates must be a JSON object".to_string(),
                ))
            }
        },
        None => Map::new(),
    };

    for (key, value) in set {
        merged.insert(key.clone(), value.clone());
    }

    Ok(merged)
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
