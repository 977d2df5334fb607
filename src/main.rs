//! descent-router
//!
//! Builds the plots application's route table and dispatches paths against
//! it from the command line.
//!
//! # Architecture Overview
//!
//! ```text
//!   app.toml ──▶ config (load + validate) ──▶ Router::from_config ◀── ViewRegistry
//!                                                   │
//!                      ┌────────────────────────────┼──────────────────────┐
//!                      ▼                            ▼                      ▼
//!                  `routes`                `resolve` / `locate`       `navigate`
//!               (table dump)               (one-shot dispatch)   (navigator task,
//!                                                                 stdin events)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use descent_router::config::{load_config, AppConfig};
use descent_router::lifecycle::Shutdown;
use descent_router::navigation::{NavigationEvent, Navigator, Resolution};
use descent_router::observability::init_logging;
use descent_router::routing::{NamedView, Router, ViewRegistry, SNP_DESCENT_PLOTS};

#[derive(Parser)]
#[command(name = "descent-router")]
#[command(about = "Inspect and exercise the plots application's route table", long_about = None)]
struct Cli {
    /// TOML configuration file. Uses the built-in route table when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additional view names the shell provides (SnpDescentPlots is always present).
    #[arg(long = "view")]
    views: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,
    /// Dispatch route paths
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Dispatch full locations (base URL and mode applied)
    Locate {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Replay navigation events from stdin (`push /x`, `replace /y`, `back`, `forward`)
    Navigate {
        /// Location the session starts at.
        #[arg(long, default_value = "/")]
        initial: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    init_logging(&config.observability.log_level);

    let mut views = ViewRegistry::new();
    views.register(NamedView::handle(SNP_DESCENT_PLOTS));
    for name in &cli.views {
        views.register(NamedView::handle(name.clone()));
    }

    let router = Arc::new(Router::from_config(&config, &views)?);
    tracing::info!(
        mode = %router.mode(),
        base = %router.base(),
        routes = router.route_count(),
        "Router ready"
    );

    match cli.command {
        Commands::Routes => {
            let table: Vec<_> = router
                .routes()
                .map(|entry| {
                    json!({
                        "path": entry.path,
                        "view": entry.view.name(),
                        "name": entry.name,
                        "href": router.href(&entry.path),
                    })
                })
                .collect();
            let out = json!({
                "mode": router.mode(),
                "base": router.base(),
                "routes": table,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Resolve { paths } => {
            for path in paths {
                print_resolution(&Resolution::resolve(&router, &path))?;
            }
        }
        Commands::Locate { locations } => {
            for location in locations {
                let path = router.location_path(&location);
                print_resolution(&Resolution::resolve(&router, &path))?;
            }
        }
        Commands::Navigate { initial } => navigate(router, &initial).await?,
    }

    Ok(())
}

async fn navigate(router: Arc<Router>, initial: &str) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Shutdown::new();
    let handle = Navigator::spawn(router, initial, &shutdown);
    print_resolution(&handle.current())?;

    let mut updates = handle.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let resolution = updates.borrow_and_update().clone();
            if let Err(e) = print_resolution(&resolution) {
                tracing::error!(error = %e, "Failed to write resolution");
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = shutdown.trigger_on_ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            res = &mut ctrl_c => {
                res?;
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match NavigationEvent::parse(&line) {
                    Some(event) => handle.send(event).await?,
                    None => tracing::warn!(input = %line, "Unrecognized navigation command"),
                }
            }
        }
    }

    handle.close().await;
    printer.await?;
    Ok(())
}

fn print_resolution(resolution: &Resolution) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(resolution)?);
    Ok(())
}
