//! switch-admin-ui command line.
//!
//! Operator tooling around the navigation and form core:
//!
//! ```text
//! switch-admin-ui [--config app.toml] resolve /auth /nowhere
//! switch-admin-ui routes --expand
//! switch-admin-ui check-config
//! switch-admin-ui match-fields "s3cret" "s3cret"
//! switch-admin-ui watch /auth
//! ```
//!
//! Output is JSON on stdout; logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use switch_admin_ui::config::{load_config, watcher::ConfigWatcher, AppConfig};
use switch_admin_ui::forms::reset_password::{CONFIRM_PASSWORD, PASSWORD};
use switch_admin_ui::forms::reset_password_form;
use switch_admin_ui::observability::init_logging;
use switch_admin_ui::routes::{build_router, default_registry};
use switch_admin_ui::routing::Router;

#[derive(Parser)]
#[command(name = "switch-admin-ui")]
#[command(about = "Route resolution and form validation for the switch admin UI", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve URLs against the route table
    Resolve {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Print the route table
    Routes {
        /// Load lazy tables and views
        #[arg(long)]
        expand: bool,
    },
    /// Validate the configuration file
    CheckConfig,
    /// Run the reset-password form with two values
    MatchFields { password: String, confirm: String },
    /// Re-resolve URLs whenever the configuration file changes
    Watch {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = default_registry();

    let config = match &cli.config {
        Some(path) => load_config(path, &registry)?,
        None => AppConfig::default(),
    };
    init_logging(&config.observability);

    tracing::debug!(config = ?cli.config, "switch-admin-ui v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Resolve { urls } => {
            let router = build_router(&config, &registry)?;
            print_json(&resolve_all(&router, &urls))?;
        }
        Commands::Routes { expand } => {
            let router = build_router(&config, &registry)?;
            print_json(&serde_json::to_value(router.root().describe(expand))?)?;
        }
        Commands::CheckConfig => {
            // Loading already validated it; building checks registry names.
            build_router(&config, &registry)?;
            print_json(&json!({
                "config": cli.config.as_ref().map(|p| p.display().to_string()),
                "valid": true,
            }))?;
        }
        Commands::MatchFields { password, confirm } => {
            let mut form = reset_password_form(&config.forms);
            form.set_value(PASSWORD, password)?;
            form.set_value(CONFIRM_PASSWORD, confirm)?;
            print_json(&form.error_report())?;
        }
        Commands::Watch { urls } => {
            let Some(path) = cli.config else {
                return Err("watch requires --config".into());
            };
            watch(path, config, urls).await?;
        }
    }

    Ok(())
}

async fn watch(path: PathBuf, config: AppConfig, urls: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let registry = default_registry();
    let current = ArcSwap::from_pointee(build_router(&config, &registry)?);
    print_json(&resolve_all(&current.load(), &urls))?;

    let (watcher, mut updates) = ConfigWatcher::new(&path, registry.clone());
    let _handle = watcher.run()?;

    loop {
        tokio::select! {
            Some(new_config) = updates.recv() => {
                match build_router(&new_config, &registry) {
                    Ok(router) => {
                        current.store(Arc::new(router));
                        tracing::info!("Route table reloaded");
                        print_json(&resolve_all(&current.load(), &urls))?;
                    }
                    Err(e) => tracing::error!(error = %e, "Failed to rebuild routes, keeping current table"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }

    Ok(())
}

fn resolve_all(router: &Router, urls: &[String]) -> Value {
    let results: Vec<Value> = urls
        .iter()
        .map(|url| match router.navigate(url) {
            Ok(resolution) => json!({ "input": url, "resolution": resolution }),
            Err(e) => json!({ "input": url, "error": e.to_string() }),
        })
        .collect();
    Value::Array(results)
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
