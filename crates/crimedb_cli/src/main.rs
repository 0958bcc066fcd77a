//! crimedb CLI
//!
//! Records criminals, their criminal records, police officers and crime
//! scenes in a local SQLite file.
//!
//! Exit codes: `0` success (including "not found" on delete), `1` rejected
//! input or reference, `2` store unavailable.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use crimedb_core::{default_log_level, init_logging, open_db, CaseService};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

mod commands;
mod error;
mod input;

use commands::CommandContext;
use error::{CliError, CliResult};
use input::Prompter;

const DEFAULT_DB_PATH: &str = "criminals.db";

#[derive(Debug, Parser)]
#[command(name = "crimedb", version)]
#[command(about = "Record and query criminals, records, officers and crime scenes", long_about = None)]
struct Cli {
    /// SQLite store file
    #[arg(long, global = true, env = "CRIMEDB_PATH", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Never prompt; a missing field fails the command
    #[arg(long, global = true)]
    no_input: bool,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "CRIMEDB_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log directory [default: `logs` next to the store file]
    #[arg(long, global = true, env = "CRIMEDB_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
#[command(rename_all = "snake_case")]
enum Commands {
    /// Add a criminal
    AddCriminal(commands::criminal::AddCriminalArgs),
    /// Delete a criminal without criminal records
    DeleteCriminal(commands::DeleteArgs),
    /// List all criminals
    ListCriminals(commands::ListArgs),
    /// Add a criminal record for an existing criminal
    AddCriminalRecord(commands::criminal_record::AddCriminalRecordArgs),
    /// Delete a criminal record without crime scenes
    DeleteCriminalRecord(commands::DeleteArgs),
    /// List all criminal records with their criminal
    ListCriminalRecords(commands::ListArgs),
    /// Add a police officer
    AddPoliceOfficer(commands::police_officer::AddPoliceOfficerArgs),
    /// Delete a police officer without crime scenes
    DeletePoliceOfficer(commands::DeleteArgs),
    /// List all police officers
    ListPoliceOfficers(commands::ListArgs),
    /// Add a crime scene for an existing officer and criminal record
    AddCrimeScene(commands::crime_scene::AddCrimeSceneArgs),
    /// Delete a crime scene
    DeleteCrimeScene(commands::DeleteArgs),
    /// List all crime scenes with their officer and record
    ListCrimeScenes(commands::ListArgs),
    /// Insert the sample dataset
    Seed,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(&err),
    };
    init_cli_logging(&cli);

    let started_at = Instant::now();
    match run(cli) {
        Ok(()) => {
            info!(
                "event=command module=cli status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(
                "event=command module=cli status=error duration_ms={} exit_code={} error={err}",
                started_at.elapsed().as_millis(),
                err.exit_code()
            );
            eprintln!("error: {err}");
            if err.is_retryable() {
                eprintln!("hint: another crimedb process holds the store; retry the command");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let conn = open_db(&cli.db).map_err(|source| CliError::Open {
        path: cli.db.clone(),
        source,
    })?;
    let ctx = CommandContext {
        service: CaseService::new(&conn),
        prompter: Prompter::new(cli.no_input),
    };

    match cli.command {
        Commands::AddCriminal(args) => commands::criminal::add(&ctx, args),
        Commands::DeleteCriminal(args) => commands::criminal::delete(&ctx, args),
        Commands::ListCriminals(args) => commands::criminal::list(&ctx, args),
        Commands::AddCriminalRecord(args) => commands::criminal_record::add(&ctx, args),
        Commands::DeleteCriminalRecord(args) => commands::criminal_record::delete(&ctx, args),
        Commands::ListCriminalRecords(args) => commands::criminal_record::list(&ctx, args),
        Commands::AddPoliceOfficer(args) => commands::police_officer::add(&ctx, args),
        Commands::DeletePoliceOfficer(args) => commands::police_officer::delete(&ctx, args),
        Commands::ListPoliceOfficers(args) => commands::police_officer::list(&ctx, args),
        Commands::AddCrimeScene(args) => commands::crime_scene::add(&ctx, args),
        Commands::DeleteCrimeScene(args) => commands::crime_scene::delete(&ctx, args),
        Commands::ListCrimeScenes(args) => commands::crime_scene::list(&ctx, args),
        Commands::Seed => commands::seed::execute(&ctx),
    }
}

/// Help and version output keep clap's behavior; any other parse failure is
/// rejected input.
fn report_parse_error(err: &clap::Error) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        err.exit();
    }

    if is_value_error(err.kind()) {
        let rendered = err.to_string();
        eprintln!("{}", rendered.lines().next().unwrap_or("error: invalid value"));
    } else {
        let _ = err.print();
    }
    ExitCode::from(parse_error_exit_code(err.kind()))
}

fn is_value_error(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::InvalidValue | ErrorKind::ValueValidation)
}

fn parse_error_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn init_cli_logging(cli: &Cli) {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let result = resolve_log_dir(cli.log_dir.as_deref(), &cli.db)
        .map_err(|err| err.to_string())
        .and_then(|dir| match dir {
            Some(dir) => init_logging(level, &dir).map_err(|err| err.to_string()),
            None => Ok(()),
        });
    if let Err(err) = result {
        eprintln!("warning: file logging disabled: {err}");
    }
}

/// An explicit directory wins. The default sits next to the store and is
/// skipped when the store's directory does not exist, so logging never
/// creates a path the store open should reject.
fn resolve_log_dir(log_dir: Option<&Path>, db_path: &Path) -> std::io::Result<Option<PathBuf>> {
    if let Some(dir) = log_dir {
        return absolutize(dir).map(Some);
    }
    let db_path = absolutize(db_path)?;
    let base = db_path.parent().map(Path::to_path_buf).unwrap_or_default();
    if !base.is_dir() {
        return Ok(None);
    }
    Ok(Some(base.join("logs")))
}

fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
