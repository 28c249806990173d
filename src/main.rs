//! Storefront shell (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /products/123          ┌──────────────────────────────────────────────┐
//!     ───────────────────────────┼─▶ http server ──▶ routing ──▶ views ──┐      │
//!                                │   (request id,    (first     (render) │      │
//!                                │    trace,         match)              ▼      │
//!     200 text/html              │    timeout)                   layout wrap    │
//!     ◀──────────────────────────┼────────────────────────────────────┘         │
//!                                │                                              │
//!                                │  config · observability · lifecycle · admin  │
//!                                └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use storefront_shell::config::{load_config, ShellConfig};
use storefront_shell::lifecycle::{signals, startup, Shutdown};
use storefront_shell::navigation::render_frame;
use storefront_shell::observability::logging;
use storefront_shell::routing::{Location, Router};
use storefront_shell::views::{Layout, ViewRegistry};

#[derive(Parser)]
#[command(name = "storefront-shell")]
#[command(about = "Serve and inspect the storefront route table", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the shell over HTTP (default)
    Serve,
    /// Show which view a location resolves to
    Resolve {
        /// Path or absolute URL, e.g. "/products/123"
        location: String,

        /// Print the rendered document instead of the view name
        #[arg(long)]
        html: bool,
    },
    /// Print the route table in evaluation order
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!("storefront-shell v{} starting", env!("CARGO_PKG_VERSION"));
            let shutdown = Shutdown::new();
            tokio::spawn(signals::forward_signals(shutdown.clone()));
            startup::run(config, shutdown).await?;
        }
        Commands::Resolve { location, html } => {
            let router = Router::from_config(&config.routes, &ViewRegistry::standard())?;
            let location = Location::parse(&location);
            let frame = render_frame(&router, &Layout::default(), &location);

            if html {
                print!("{}", frame.html);
            } else {
                match frame.view {
                    Some(view) => println!("{} -> {}", location, view),
                    None => println!("{} -> (no route)", location),
                }
            }
        }
        Commands::Routes => {
            let router = Router::from_config(&config.routes, &ViewRegistry::standard())?;
            println!("{:<4} {:<24} {:<6} VIEW", "#", "PATTERN", "EXACT");
            for (i, binding) in router.bindings().iter().enumerate() {
                println!(
                    "{:<4} {:<24} {:<6} {}",
                    i,
                    binding.pattern(),
                    if binding.is_exact() { "yes" } else { "no" },
                    binding.view_id()
                );
            }
        }
    }

    Ok(())
}
