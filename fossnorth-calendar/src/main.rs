mod stamp;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::Parser;
use fossnorth_core::config::Config;
use fossnorth_core::ics::generate_calendar;
use fossnorth_core::logging;
use fossnorth_core::speaker::load_speakers;

#[derive(Parser)]
#[command(name = "fossnorth-calendar")]
#[command(about = "Generate the foss-north 2025 calendar (.ics) from a speaker schedule")]
struct Cli {
    /// Speaker schedule (YAML list of speaker entries)
    #[arg(default_value = "speakers.yaml")]
    speakers: PathBuf,

    /// DTSTAMP for every event (RFC 3339). Defaults to today at 16:00 local time
    #[arg(long, value_parser = stamp::parse_stamp)]
    stamp: Option<DateTime<Utc>>,

    /// Config file (defaults to ~/.config/fossnorth/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = Config::load(cli.config.as_deref()).context("Could not load configuration")?;

    let speakers = load_speakers(&cli.speakers)
        .with_context(|| format!("Could not read {}", cli.speakers.display()))?;
    tracing::info!(count = speakers.len(), path = %cli.speakers.display(), "loaded speakers");

    let events = fossnorth_core::build_events(&speakers)?;

    let stamp = cli.stamp.unwrap_or_else(|| stamp::default_stamp(Local::now()));
    let ics = generate_calendar(&events, &config.calendar, stamp);

    // The calendar is fully rendered before the first byte is written
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(ics.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
