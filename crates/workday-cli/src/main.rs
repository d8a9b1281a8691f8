//! `workday` — offline business-date calculation.
//!
//! Runs the pure pipeline against a holiday list supplied on the command
//! line; no network access.

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use clap::Parser;
use workday_engine::{calculate_local, to_instant, to_local, HolidaySet};

/// Advance an instant by whole business days and hours.
#[derive(Parser, Debug)]
#[command(name = "workday", version)]
struct Cli {
    /// Start instant (RFC 3339); defaults to now
    #[arg(long)]
    date: Option<String>,

    /// Business days to add
    #[arg(long, default_value_t = 0)]
    days: u32,

    /// Business hours to add
    #[arg(long, default_value_t = 0)]
    hours: u32,

    /// Holiday date (YYYY-MM-DD); may be repeated
    #[arg(long = "holiday", value_name = "DATE")]
    holidays: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.days == 0 && cli.hours == 0 {
        bail!("at least one of --days or --hours must be positive");
    }

    let start: DateTime<Utc> = match &cli.date {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid RFC 3339 date: '{raw}'"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let holidays = cli
        .holidays
        .iter()
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid holiday date: '{raw}' (expected YYYY-MM-DD)"))
        })
        .collect::<anyhow::Result<HolidaySet>>()?;

    let end = calculate_local(to_local(start), cli.days, cli.hours * 60, &holidays);
    println!("{}", to_instant(end).to_rfc3339_opts(SecondsFormat::Millis, true));
    Ok(())
}
