//! smig - site migration export CLI
//!
//! Drives the sm-server migration API from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Create a content-only export
//! smig export create --type content_only --pretty
//!
//! # List exports on a remote server
//! smig --server https://admin.example.com --token "$JWT" export list
//!
//! # Inspect one export
//! smig export get migration-20260314-093015-abcd1234.json
//! ```

mod cli;
mod commands;
mod export_commands;

use crate::{cli::Cli, commands::Commands, export_commands::ExportCommands};

use sm_cli::Client;

use std::process::ExitCode;

use clap::Parser;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flag > configured public URL > default
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url, cli.token.as_deref());

    let result = match cli.command {
        Commands::Export { action } => match action {
            ExportCommands::Create { export_type } => {
                client.create_export(export_type.as_deref()).await
            }
            ExportCommands::List => client.list_exports().await,
            ExportCommands::Get { file } => client.get_export(&file).await,
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: failed to serialize output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn discover_server_url() -> String {
    match sm_config::Config::load() {
        Ok(config) => config.public_url(),
        Err(e) => {
            eprintln!("Warning: could not load configuration ({}), using {}", e, DEFAULT_SERVER_URL);
            DEFAULT_SERVER_URL.to_string()
        }
    }
}
