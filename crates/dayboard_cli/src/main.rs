//! Command-line front end for Dayboard core.
//!
//! # Responsibility
//! - Verify `dayboard_core` linkage with deterministic ping/version output.
//! - Run normalization and validation over JSON files or stdin so record
//!   fixtures can be checked without the app.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dayboard_core::{
    init_logging, messages, normalize, parse_record_json, prepare_record, to_json_string,
    validate_record, EntityKind, PrepareError,
};
use log::{info, warn};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_OK: u8 = 0;
const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "dayboard", version, about = "Validate and sanitize Dayboard records")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); requires --log-dir.
    #[arg(
        long,
        global = true,
        env = "DAYBOARD_LOG_LEVEL",
        default_value = dayboard_core::default_log_level()
    )]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "DAYBOARD_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the normalized form of a record.
    Normalize(InputArgs),
    /// Print validation messages for a record; exits 1 when any rule fails.
    Validate {
        /// Entity kind: task|project|label.
        kind: EntityKind,
        #[command(flatten)]
        input: InputArgs,
        /// Print issues as JSON instead of plain messages.
        #[arg(long)]
        json: bool,
    },
    /// Validate, then print the normalized record; exits 1 when rejected.
    Prepare {
        /// Entity kind: task|project|label.
        kind: EntityKind,
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Normalize(_) => "normalize",
            Self::Validate { .. } => "validate",
            Self::Prepare { .. } => "prepare",
        }
    }

    fn input(&self) -> &InputArgs {
        match self {
            Self::Normalize(input) => input,
            Self::Validate { input, .. } | Self::Prepare { input, .. } => input,
        }
    }
}

#[derive(Debug, Args)]
struct InputArgs {
    /// JSON file to read; stdin when omitted or `-`.
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        match self.file.as_deref() {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display())),
            _ => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let result = run(cli, &mut stdout, &mut stderr);
    ExitCode::from(exit_status(result, &mut stderr))
}

/// 0 = valid, 1 = invalid or rejected record, 2 = read/parse/setup failure.
fn exit_status(result: Result<u8>, err: &mut impl Write) -> u8 {
    match result {
        Ok(code) => code,
        Err(error) => {
            warn!("event=cli_command module=cli status=error exit_code={EXIT_ERROR}");
            let _ = writeln!(err, "error: {error:#}");
            EXIT_ERROR
        }
    }
}

fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let log_dir = log_dir.to_str().context("log dir must be valid UTF-8")?;
        init_logging(&cli.log_level, log_dir).context("failed to initialize logging")?;
    }

    let Some(command) = cli.command else {
        writeln!(out, "dayboard_core ping={}", dayboard_core::ping())?;
        writeln!(out, "dayboard_core version={}", dayboard_core::core_version())?;
        return Ok(EXIT_OK);
    };

    let input = command.input().read()?;
    execute(&command, &input, out, err)
}

/// Runs one record command over already-read JSON text.
fn execute(
    command: &Command,
    input: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let record = parse_record_json(input)?;

    let code = match command {
        Command::Normalize(_) => {
            writeln!(out, "{}", to_json_string(normalize(&record)))?;
            EXIT_OK
        }
        Command::Validate { kind, json, .. } => {
            let issues = validate_record(*kind, &record);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&issues)?)?;
            } else {
                for message in messages(&issues) {
                    writeln!(out, "{message}")?;
                }
            }
            if issues.is_empty() {
                EXIT_OK
            } else {
                EXIT_INVALID
            }
        }
        Command::Prepare { kind, .. } => match prepare_record(*kind, &record) {
            Ok(prepared) => {
                writeln!(out, "{}", to_json_string(prepared))?;
                EXIT_OK
            }
            Err(PrepareError::Rejected { issues, .. }) => {
                for message in messages(&issues) {
                    writeln!(err, "{message}")?;
                }
                EXIT_INVALID
            }
            Err(other) => return Err(other.into()),
        },
    };

    info!(
        "event=cli_command module=cli status=ok command={} exit_code={}",
        command.name(),
        code
    );
    Ok(code)
}
