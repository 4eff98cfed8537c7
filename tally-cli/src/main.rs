use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tally_ingest::{parse_statement, parse_statement_file};
use tally_report::{render_report, summarize};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Spending report for a bank statement CSV export")]
struct Cli {
    /// Path to transactions CSV. Reads stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise only warnings. Logs go to stderr, the report to stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();

    run(cli.file.as_deref(), io::stdin().lock(), io::stdout().lock())
}

/// Parse the statement from `file` (or `stdin`) and write the report to `out`
fn run<R: Read, W: io::Write>(file: Option<&Path>, stdin: R, out: W) -> Result<()> {
    let records = match file {
        Some(path) => {
            info!(path = %path.display(), "reading statement");
            parse_statement_file(path).with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            info!("reading statement from stdin");
            parse_statement(stdin).context("parsing statement from stdin")?
        }
    };

    let summary = summarize(&records).context("summarizing statement")?;
    render_report(&summary, out).context("writing report")?;
    Ok(())
}
