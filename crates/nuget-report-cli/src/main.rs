//! CLI entry point for nuget-report.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, the workspace
//! prompt, and exit codes. All business logic lives in the `nuget-report-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use nuget_report_app::{
    Destination, ReportInput, emit_report, load_config_text, render_annotations, run_report,
    write_classification_json,
};
use nuget_report_settings::{DEFAULT_CONFIG_FILE, Overrides};
use std::io::{BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "nuget-report",
    version,
    about = "NuGet package usage report for .NET workspaces"
)]
struct Cli {
    /// Workspace to scan (defaults to GITHUB_WORKSPACE, else asks on stdin).
    #[arg(long)]
    workspace: Option<Utf8PathBuf>,

    /// Path to the config TOML, relative to the workspace.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the workspace and write the package report (default).
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Centralized version file; forces centralized mode.
    #[arg(long)]
    version_file: Option<String>,

    /// Write the report to this file instead of the job summary or the default output.
    #[arg(long)]
    output: Option<Utf8PathBuf>,

    /// Also write the classification as JSON.
    #[arg(long)]
    json_out: Option<Utf8PathBuf>,

    /// Print diagnostics as GitHub Actions annotations on stdout.
    #[arg(long)]
    annotations: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.cmd {
        Some(Commands::Report(args)) => cmd_report(&cli, args),
        None => cmd_report(&cli, &ReportArgs::default()),
    };

    if let Err(err) = result {
        eprintln!("nuget-report error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn cmd_report(cli: &Cli, args: &ReportArgs) -> anyhow::Result<()> {
    let workspace = resolve_workspace(cli.workspace.clone())?;
    tracing::debug!(%workspace, config = %cli.config, "resolved workspace");

    let config_path = workspace.join(&cli.config);
    let config_text = load_config_text(&config_path)?;

    let overrides = Overrides {
        version_file: args.version_file.clone(),
        output: args.output.as_ref().map(|p| p.to_string()),
    };

    let output = run_report(ReportInput {
        workspace: &workspace,
        config_text: &config_text,
        overrides,
    })?;

    if args.annotations {
        for line in render_annotations(&output.diagnostics) {
            println!("{}", line);
        }
    }

    // JSON goes out before the report.
    if let Some(json_out) = &args.json_out {
        write_classification_json(&workspace.join(json_out), &output.classification)?;
    }

    let step_summary = std::env::var("GITHUB_STEP_SUMMARY").ok();
    let destination = Destination::select(
        &workspace,
        &output.resolved_config.effective.output,
        args.output.as_deref(),
        step_summary.as_deref(),
    );
    emit_report(&destination, &output.markdown)?;

    Ok(())
}

/// `--workspace`, else `GITHUB_WORKSPACE`, else ask on stdin.
fn resolve_workspace(flag: Option<Utf8PathBuf>) -> anyhow::Result<Utf8PathBuf> {
    if let Some(ws) = flag {
        return Ok(ws);
    }
    if let Some(ws) = std::env::var("GITHUB_WORKSPACE")
        .ok()
        .filter(|s| !s.trim().is_empty())
    {
        return Ok(Utf8PathBuf::from(ws));
    }

    let stdin = std::io::stdin();
    prompt_workspace(&mut stdin.lock(), &mut std::io::stderr())
}

/// Ask until an existing directory is given. EOF aborts.
fn prompt_workspace<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<Utf8PathBuf> {
    write!(out, "Enter the workspace directory to scan: ").context("write prompt")?;
    out.flush().context("flush prompt")?;

    loop {
        let mut line = String::new();
        let read = input.read_line(&mut line).context("read workspace from stdin")?;
        if read == 0 {
            anyhow::bail!("no workspace directory given");
        }

        let candidate = line.trim();
        if !candidate.is_empty() && Utf8Path::new(candidate).is_dir() {
            return Ok(Utf8PathBuf::from(candidate));
        }

        write!(out, "Invalid directory. Please enter a valid path: ").context("write prompt")?;
        out.flush().context("flush prompt")?;
    }
}
