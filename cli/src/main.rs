//! # viewroute CLI
//!
//! Terminal shell for the chat and dashboard application.
//!
//! ## Usage
//!
//! - `viewroute` - Start the interactive shell
//! - `viewroute routes` - Show the route table
//! - `viewroute resolve <PATH_OR_URL>` - Show which view a location renders
//! - `viewroute href <NAME>` - Print the URL for a named route
//!
//! The router is built once here, at startup, and handed to whichever
//! command runs. A misconfigured route table stops the program before any
//! view is shown.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use viewroute_core::{create_app_router, ModeKind};

mod commands;
mod config;
mod interactive;

use commands::{href_command, interactive_command, resolve_command, routes_command};
use config::CliConfigLoader;

/// viewroute - Chat and dashboard shell
#[derive(Parser)]
#[command(name = "viewroute")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chat and dashboard shell built on a typed route table")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation mode (history, hash, memory)
    #[arg(long)]
    mode: Option<ModeKind>,

    /// Base path the application is served from
    #[arg(long)]
    base: Option<String>,

    /// Maximum number of history entries (0 disables back/forward)
    #[arg(long)]
    max_history: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output mode
    #[arg(short = 'd', long = "debug")]
    debug_output: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route table
    Routes {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a path or URL to a route
    Resolve {
        /// Path (`/dashboard`) or absolute URL
        target: String,
    },

    /// Print the URL for a named route
    Href {
        /// Route name
        name: String,

        /// Route parameter
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(mode) = cli.mode {
        loader = loader.with_mode_override(mode);
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    if let Some(max_history) = cli.max_history {
        loader = loader.with_max_history_override(max_history);
    }

    loader
}

/// Log to stderr; the full-screen shell only shows errors unless asked
fn init_tracing(cli: &Cli) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if cli.verbose || cli.debug_output {
        EnvFilter::new("debug")
    } else if cli.command.is_none() {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(&cli);

    let settings = build_config_loader(&cli).load()?;

    let pages = interactive::pages::page_registry();
    let router = create_app_router(&pages, &settings).context("Invalid route table")?;

    match cli.command {
        Some(Commands::Routes { json }) => routes_command(&router, json)?,
        Some(Commands::Resolve { target }) => {
            if !resolve_command(&router, &target)? {
                // Distinguish "no match" from errors
                return Ok(ExitCode::from(2));
            }
        }
        Some(Commands::Href { name, params }) => href_command(&router, &name, &params)?,
        None => interactive_command(router, pages, cli.debug_output).await?,
    }

    Ok(ExitCode::SUCCESS)
}
