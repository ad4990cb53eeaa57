//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `paindiary_core` linkage without the mobile shell.
//! - Offer quick local access to the configured diary DB.

use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use paindiary_core::db::open_db;
use paindiary_core::model::entry::validate_level;
use paindiary_core::{init_logging, DiaryConfig, DiaryService, SqliteEntryRepository};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "paindiary_cli", version, about = "Pain diary core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print core linkage and version (default)
    Ping,
    /// Record a pain level at the current instant
    Add {
        /// Pain level from 0 to 10
        #[arg(value_parser = parse_level, allow_negative_numbers = true)]
        level: f64,
    },
    /// List every entry in local time
    List,
    /// Show today's and this month's averages
    Stats,
}

fn parse_level(raw: &str) -> Result<f64, String> {
    let level: f64 = raw.parse().map_err(|err| format!("{err}"))?;
    validate_level(level).map_err(|err| err.to_string())?;
    Ok(level)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command.unwrap_or(Command::Ping)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    let config = DiaryConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    }

    if let Command::Ping = command {
        println!("paindiary_core ping={}", paindiary_core::ping());
        println!("paindiary_core version={}", paindiary_core::core_version());
        return Ok(());
    }

    let conn = open_db(&config.db_path).map_err(|err| err.to_string())?;
    let repo = SqliteEntryRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let service = DiaryService::new(repo);

    match command {
        Command::Ping => {}
        Command::Add { level } => {
            let entry = service.record_now(level).map_err(|err| err.to_string())?;
            println!("added level={} timestamp_ms={}", entry.level, entry.timestamp_ms);
        }
        Command::List => {
            for entry in service.entries().map_err(|err| err.to_string())? {
                let at = Local
                    .timestamp_millis_opt(entry.timestamp_ms)
                    .single()
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| entry.timestamp_ms.to_string());
                println!("{at}  {:>4.1}", entry.level);
            }
        }
        Command::Stats => {
            let now = Local::now();
            let day = service.average_for_day(&now).map_err(|err| err.to_string())?;
            let month = service
                .average_for_month(&now)
                .map_err(|err| err.to_string())?;
            println!("today_average={day:.2}");
            println!("month_average={month:.2}");
        }
    }
    Ok(())
}
