// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notiva - a natural-language notification relay.
//!
//! This is the binary entry point for the Notiva server.

use clap::{Parser, Subcommand};

use notiva_config::NotivaConfig;

mod serve;

/// Notiva - a natural-language notification relay.
#[derive(Parser, Debug)]
#[command(name = "notiva", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Notiva relay server.
    Serve,
    /// Print the resolved configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match notiva_config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("notiva: configuration error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("notiva: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            print_config(&config);
        }
        None => {
            println!("notiva: use --help for available commands");
        }
    }
}

/// Prints the effective configuration as TOML.
fn print_config(config: &NotivaConfig) {
    match render_config(config) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("notiva: could not render configuration: {e}"),
    }
}

/// Renders the configuration with the provider credential redacted.
fn render_config(config: &NotivaConfig) -> Result<String, toml::ser::Error> {
    let mut shown = config.clone();
    shown.provider.api_key = "[redacted]".to_string();
    toml::to_string_pretty(&shown)
}
