// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printerinfo: list installed Windows printers and the default printer.
//
// Entry point. Initialises logging, parses the command line, runs one query
// and prints the result to stdout. Logs and errors go to stderr.

mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use printerinfo_core::config::{DEFAULT_SHELL, QueryConfig};
use printerinfo_core::error::{PrinterInfoError, Result};
use printerinfo_core::human_errors::humanize_error;
use printerinfo_query::PrinterQuery;

#[derive(Debug, Parser)]
#[command(name = "printerinfo")]
#[command(about = "Show installed printers and the default printer")]
struct Cli {
    /// Management shell used to run the printer query.
    #[arg(long, global = true, default_value = DEFAULT_SHELL)]
    shell: String,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every installed printer.
    List,
    /// Show the default printer.
    Default,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "printer query failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// What the user sees on stderr when a query fails.
fn failure_message(err: &PrinterInfoError) -> String {
    let human = humanize_error(err);
    format!("{}\n{}", human.message, human.suggestion)
}

async fn run(cli: &Cli) -> Result<String> {
    let config = QueryConfig::default().with_shell(&cli.shell);
    let query = PrinterQuery::from_config(&config);

    let rendered = match cli.command {
        Command::List => {
            let printers = query.printers().await?;
            if cli.json {
                output::to_json(&printers)?
            } else {
                output::printers_text(&printers)
            }
        }
        Command::Default => {
            let printer = query.default_printer().await?;
            if cli.json {
                output::to_json(&printer)?
            } else {
                output::default_text(printer.as_ref())
            }
        }
    };
    Ok(rendered)
}
