//! SOLID CLI - run the principle walkthroughs from a terminal

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use solid::{DemoConfig, Principle, Stdout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "Walk through the SOLID principles with bad and good examples")]
#[command(version)]
struct Cli {
    /// Really sleep through lunch breaks
    #[arg(long, env = "SOLID_PAUSE", global = true)]
    pause: bool,

    /// Output format
    #[arg(long, value_enum, env = "SOLID_FORMAT", default_value = "text", global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run walkthroughs (all of them if none are named)
    Run {
        /// Principles to run, by name or alias (srp, ocp, lsp, isp, dip)
        principles: Vec<String>,
    },

    /// List the principles
    List,
}

#[derive(Serialize)]
struct PrincipleInfo {
    name: &'static str,
    short: &'static str,
    summary: &'static str,
}

fn main() -> Result<()> {
    // Logs go to stderr so narration on stdout stays readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solid=warn,solid_cli=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = DemoConfig { pause: cli.pause };

    match cli.command {
        Commands::Run { principles } => {
            let principles = resolve_principles(&principles)?;
            run_walkthroughs(&principles, &config, cli.format)
        }
        Commands::List => run_list(cli.format),
    }
}

/// Parse principle names, defaulting to all of them
fn resolve_principles(names: &[String]) -> Result<Vec<Principle>> {
    if names.is_empty() {
        return Ok(Principle::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| name.parse::<Principle>().map_err(|e| anyhow!(e)))
        .collect()
}

fn run_walkthroughs(principles: &[Principle], config: &DemoConfig, format: Format) -> Result<()> {
    tracing::info!(count = principles.len(), pause = config.pause, "Running walkthroughs");

    match format {
        Format::Text => {
            for principle in principles {
                println!("{}", "*".repeat(10));
                println!("{}: {}", principle, principle.summary());
                println!("{}", "*".repeat(10));
                solid::run(*principle, config, &Stdout)?;
            }
        }
        Format::Json => println!("{}", render_reports(principles, config)?),
    }

    Ok(())
}

/// Capture each walkthrough and render the reports as a JSON array
fn render_reports(principles: &[Principle], config: &DemoConfig) -> Result<String> {
    let reports = principles
        .iter()
        .map(|p| solid::run_captured(*p, config))
        .collect::<solid::Result<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&reports)?)
}

fn run_list(format: Format) -> Result<()> {
    let infos: Vec<PrincipleInfo> = Principle::ALL
        .iter()
        .map(|p| PrincipleInfo {
            name: p.as_str(),
            short: p.short(),
            summary: p.summary(),
        })
        .collect();

    match format {
        Format::Text => {
            for info in &infos {
                println!("{:<4} {:<22} {}", info.short, info.name, info.summary);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
    }

    Ok(())
}
