//! Wireup - Entry Point
//!
//! Binary entry point for the wireup demo CLI. Lives in the `wireup` facade
//! crate so the demo modules in [`wireup::demo`] are linked into the catalog.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `wireup modules` | List the linked constructor modules |
//! | `wireup constructors` | List the constructors the configuration installs |
//! | `wireup run` | Bootstrap from configuration and resolve the demo root |
//! | `wireup run --json` | Same, printed as JSON |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use wireup::ResolutionReport;
use wireup::demo::DemoApp;
use wireup::infrastructure::config::{AppConfig, ConfigLoader};
use wireup::infrastructure::di::build_container;
use wireup::infrastructure::logging::init_logging;

/// Name greeted by `wireup run`
const DEMO_AUDIENCE: &str = "world";

/// Command line interface for wireup
#[derive(Parser, Debug)]
#[command(name = "wireup")]
#[command(about = "Wireup - Constructor-based object-graph builder")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the constructor modules linked into this binary
    Modules,

    /// List the constructors installed by the configured modules
    Constructors,

    /// Resolve the demo root and print its greetings
    Run {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RunOutput<'a> {
    greetings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ResolutionReport>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Command::Modules => {
            for (name, description) in wireup::list_modules() {
                println!("{name:<12} {description}");
            }
            Ok(())
        }
        Command::Constructors => constructors(&config),
        Command::Run { json } => run(&config, json),
    }
}

fn constructors(config: &AppConfig) -> anyhow::Result<()> {
    let container = build_container(config).context("Failed to bootstrap container")?;
    let registry = container.registry();
    for constructor in registry.iter() {
        println!("{:>4}  {constructor}", constructor.id().to_string());
    }
    println!();
    println!(
        "{} constructors, {} capability declarations",
        registry.len(),
        registry.capabilities().len()
    );
    Ok(())
}

fn run(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let container = build_container(config).context("Failed to bootstrap container")?;
    let (app, report) = container
        .resolve_with_report::<DemoApp>()
        .context("Failed to resolve the demo root")?;

    tracing::debug!(
        greeters = app.greeters.len(),
        uptime = ?app.clock.elapsed(),
        "Demo root resolved"
    );

    let output = RunOutput {
        greetings: app.banner.render(DEMO_AUDIENCE),
        report: config.container.report.then_some(&report),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for greeting in &output.greetings {
            println!("{greeting}");
        }
        if let Some(report) = output.report {
            println!();
            println!("Invoked constructors:");
            print!("{report}");
        }
    }
    Ok(())
}
