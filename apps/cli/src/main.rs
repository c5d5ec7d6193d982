//! # wattle CLI entry point
//!
//! Batch validation and formatting of Australian identifiers on the command
//! line. Parses arguments with clap derive macros and dispatches to
//! wattle-core; every validation decision is made by the core crate.
//!
//! ```text
//! $ wattle check abn "51 824 753 556" 12345678912
//! 51 824 753 556 -> 51824753556
//! 12345678912: ABN checksum does not match
//!
//! $ cat tfns.txt | wattle check any-tfn --json
//! {"input":"459599230","valid":true,"canonical":"459599230","variant":"individual"}
//! ```
//!
//! Exit code is 0 when every value validated, 1 otherwise.

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use wattle_core::{Abn, Acn, AnyTfn, Bsb, BusinessTfn, IndividualTfn, TfnKind, ValidationError};

/// Wattle — validate and format Australian identifiers (ABN, ACN, BSB, TFN).
///
/// Checks structural and checksum validity only; registry status is not
/// queried.
#[derive(Parser, Debug)]
#[command(name = "wattle", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifiers and print their canonical form.
    Check(CheckArgs),

    /// Validate one identifier and print its standard display form.
    Format(FormatArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Identifier family to validate against.
    kind: Kind,

    /// Values to check. Reads newline-delimited values from stdin when empty.
    values: Vec<String>,

    /// Emit one JSON object per value instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Identifier family to validate against.
    kind: Kind,

    /// The value to format.
    value: String,
}

/// Identifier families addressable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    /// Australian Business Number (11 digits).
    Abn,
    /// Australian Company Number (9 digits).
    Acn,
    /// Bank State Branch code (6 digits).
    Bsb,
    /// Individual Tax File Number (9 digits).
    Tfn,
    /// Business Tax File Number (8 digits).
    BusinessTfn,
    /// Either TFN variant, resolved by length.
    AnyTfn,
}

/// One successfully validated value.
#[derive(Debug)]
struct Checked {
    canonical: String,
    display: String,
    /// TFN variant name, present only for `any-tfn` checks.
    variant: Option<&'static str>,
}

/// Validates `raw` against `kind` and collects the printable forms.
fn check_value(kind: Kind, raw: &str) -> Result<Checked, ValidationError> {
    match kind {
        Kind::Abn => {
            let id = Abn::parse(raw)?;
            Ok(Checked {
                display: id.standard_format(),
                canonical: id.as_canonical().to_string(),
                variant: None,
            })
        }
        Kind::Acn => {
            let id = Acn::parse(raw)?;
            Ok(Checked {
                display: id.standard_format(),
                canonical: id.as_canonical().to_string(),
                variant: None,
            })
        }
        Kind::Bsb => {
            let id = Bsb::parse(raw)?;
            Ok(Checked {
                display: id.as_canonical().to_string(),
                canonical: id.as_canonical().to_string(),
                variant: None,
            })
        }
        Kind::Tfn => {
            let id = IndividualTfn::parse(raw)?;
            Ok(Checked {
                display: id.as_canonical().to_string(),
                canonical: id.as_canonical().to_string(),
                variant: None,
            })
        }
        Kind::BusinessTfn => {
            let id = BusinessTfn::parse(raw)?;
            Ok(Checked {
                display: id.as_canonical().to_string(),
                canonical: id.as_canonical().to_string(),
                variant: None,
            })
        }
        Kind::AnyTfn => {
            let id = AnyTfn::parse(raw)?;
            let variant = match id.classify() {
                TfnKind::Individual => "individual",
                TfnKind::Business => "business",
            };
            Ok(Checked {
                display: id.as_canonical().to_string(),
                canonical: id.as_canonical().to_string(),
                variant: Some(variant),
            })
        }
    }
}

fn run_check(args: &CheckArgs) -> anyhow::Result<u8> {
    let values = if args.values.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("reading values from stdin")?
    } else {
        args.values.clone()
    };

    let mut failures = 0usize;
    for raw in &values {
        if raw.trim().is_empty() {
            continue;
        }
        match check_value(args.kind, raw) {
            Ok(checked) => {
                if args.json {
                    let mut line = serde_json::json!({
                        "input": raw,
                        "valid": true,
                        "canonical": checked.canonical,
                    });
                    if let Some(variant) = checked.variant {
                        line["variant"] = variant.into();
                    }
                    println!("{line}");
                } else if let Some(variant) = checked.variant {
                    println!("{raw} -> {} ({variant})", checked.canonical);
                } else {
                    println!("{raw} -> {}", checked.canonical);
                }
            }
            Err(err) => {
                failures += 1;
                if args.json {
                    let line = serde_json::json!({
                        "input": raw,
                        "valid": false,
                        "error": err.to_string(),
                    });
                    println!("{line}");
                } else {
                    eprintln!("{raw}: {err}");
                }
            }
        }
    }

    tracing::debug!(total = values.len(), failures, "check complete");
    Ok(u8::from(failures > 0))
}

fn run_format(args: &FormatArgs) -> anyhow::Result<u8> {
    match check_value(args.kind, &args.value) {
        Ok(checked) => {
            println!("{}", checked.display);
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}: {err}", args.value);
            Ok(1)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Format(args) => run_format(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
