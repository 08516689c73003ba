//! Website update CLI binary.
//!
//! A command-line interface for the update-website API.

use clap::Parser;
use siteupdate::cli::{build_updates, Cli, Command};
use siteupdate::{PrettyPrint, UpdateClient, UpdateResult};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let client = match UpdateClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the command; `Ok(false)` means the update itself failed.
async fn run(client: &UpdateClient, cli: Cli) -> siteupdate::Result<bool> {
    let options = cli.options();

    let result = match &cli.command {
        Command::Update {
            identifier,
            set,
            updates,
        } => {
            let updates = build_updates(updates.as_deref(), set)?;
            client.update(identifier, updates, &options).await
        }
        Command::Apply { path } => client.update_from_file(path.as_deref(), &options).await,
    };

    output_result(&result, cli.json)?;
    Ok(result.is_success())
}

fn output_result(result: &UpdateResult, json: bool) -> siteupdate::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.is_success() {
        println!("{}", result.pretty_print());
    } else {
        eprintln!("{}", result.pretty_print());
    }
    Ok(())
}
