use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ph_payroll::api::{AppState, create_router};
use ph_payroll::calculation::{compute, compute_with_audit, validate_statutory_tables};
use ph_payroll::config::{ConfigLoader, ServerConfig};
use ph_payroll::models::parse_money;
use ph_payroll::report::{render_banner, render_report};

/// Philippine payroll calculator using the 2022 contribution and withholding
/// tax tables.
///
/// With no subcommand, prompts for a monthly income and prints the report.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prompt for a monthly income and print the report.
    Prompt,

    /// Compute deductions for one income given on the command line.
    Compute {
        /// Gross monthly income, e.g. 25000 or "Php 25,000.00".
        income: String,

        /// Print JSON (result plus audit trail) instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Serve the HTTP API.
    Serve {
        /// Path to a YAML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured bind address.
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set, otherwise uses `default_filter`.
/// * Writes to stderr so reports on stdout stay clean.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_prompt() -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_banner())?;
    write!(stdout, "Enter monthly income: Php ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let income = parse_money(&line)?;
    let result = compute(income)?;
    write!(stdout, "{}", render_report(&result))?;
    Ok(())
}

fn run_compute(income: &str, json: bool) -> anyhow::Result<()> {
    let income = parse_money(income)?;

    if json {
        let calculation = compute_with_audit(income)?;
        let body = serde_json::json!({
            "gross_monthly_income": income,
            "result": calculation.result,
            "audit_steps": calculation.audit_steps,
            "warnings": calculation.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_report(&compute(income)?));
    }
    Ok(())
}

async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    info!(address = %config.bind_address, "Payroll API listening");
    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Prompt) {
        Command::Prompt => {
            init_tracing("warn");
            validate_statutory_tables()?;
            run_prompt()
        }
        Command::Compute { income, json } => {
            init_tracing("warn");
            validate_statutory_tables()?;
            run_compute(&income, json)
        }
        Command::Serve { config, bind } => {
            let mut server_config = ConfigLoader::load_or_default(config.as_ref())?;
            if let Some(bind) = bind {
                server_config.bind_address = bind;
            }
            init_tracing(&server_config.log_filter);
            debug!(?server_config, "Loaded configuration");

            validate_statutory_tables()?;
            run_server(server_config).await
        }
    }
}
