//! Command-line arguments and the validated settings built from them.
//!
//! Every option can also come from a `WEEKEND_*` environment variable.

use chrono::NaiveDateTime;
use clap::Parser;
use wk_calendar::CalendarRegistry;
use wk_core::errors::{Error, Result};
use wk_core::{ensure, Hour, Integer};
use wk_progress::{WeekendSchedule, Zone};

/// Raw command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "weekend", version, about = "How far is it to the weekend?")]
pub struct Cli {
    /// IANA time zone to measure in; an empty value selects the system zone.
    #[arg(long, env = "WEEKEND_TIMEZONE", default_value = "Europe/Warsaw")]
    pub timezone: String,

    /// Fixed wall-clock time (YYYY-MM-DDTHH:MM[:SS]) read in the time zone,
    /// instead of the current time.
    #[arg(long, env = "WEEKEND_AT", value_parser = parse_wall_clock)]
    pub at: Option<NaiveDateTime>,

    /// Friday hour the weekend starts at.
    #[arg(long, env = "WEEKEND_START_HOUR", default_value_t = WeekendSchedule::DEFAULT_START_HOUR)]
    pub start_hour: Hour,

    /// Monday hour the weekend ends at.
    #[arg(long, env = "WEEKEND_END_HOUR", default_value_t = WeekendSchedule::DEFAULT_END_HOUR)]
    pub end_hour: Hour,

    /// Width of the progress bar.
    #[arg(long, env = "WEEKEND_BARS", default_value_t = 20, allow_negative_numbers = true)]
    pub bars: Integer,

    /// Comma-separated country codes to show the next holiday for.
    #[arg(long, env = "WEEKEND_COUNTRIES", value_delimiter = ',', default_value = "PL")]
    pub countries: Vec<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log decisions at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

fn parse_wall_clock(s: &str) -> std::result::Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM[:SS], got {s:?}"))
}

/// Validated report settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Zone progress and "today" are measured in.
    pub zone: Zone,
    /// Fixed wall-clock time, if any.
    pub at: Option<NaiveDateTime>,
    /// Weekend boundaries.
    pub schedule: WeekendSchedule,
    /// Progress-bar width.
    pub bars: Integer,
    /// Upper-cased country codes, in the order given.
    pub countries: Vec<String>,
}

impl Settings {
    /// Validate `cli` against the calendars in `registry`.
    pub fn from_cli(cli: &Cli, registry: &CalendarRegistry) -> Result<Self> {
        ensure!(cli.bars > 0, "Invalid number of bars: {}", cli.bars);

        let countries: Vec<String> = cli
            .countries
            .iter()
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
        if let Some(unknown) = countries.iter().find(|c| !registry.contains(c)) {
            return Err(Error::UnknownCountry(unknown.clone()));
        }

        Ok(Settings {
            zone: Zone::from_name(Some(&cli.timezone))?,
            at: cli.at,
            schedule: WeekendSchedule::new(cli.start_hour, cli.end_hour)?,
            bars: cli.bars,
            countries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weekend").chain(args.iter().copied())).unwrap()
    }

    fn settings(args: &[&str]) -> Result<Settings> {
        Settings::from_cli(&parse(args), &CalendarRegistry::with_builtin())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.zone, Zone::default());
        assert_eq!(s.at, None);
        assert_eq!(s.schedule, WeekendSchedule::default());
        assert_eq!(s.bars, 20);
        assert_eq!(s.countries, vec!["PL".to_string()]);
    }

    #[test]
    fn full_command_line() {
        let s = settings(&[
            "--timezone=UTC",
            "--at=2019-02-08T15:20",
            "--start-hour=16",
            "--end-hour=8",
            "--bars=10",
            "--countries=pl,ie",
        ])
        .unwrap();
        assert_eq!(s.zone, "UTC".parse::<Zone>().unwrap());
        assert_eq!(s.at.map(|t| t.to_string()), Some("2019-02-08 15:20:00".into()));
        assert_eq!(s.schedule, WeekendSchedule::new(16, 8).unwrap());
        assert_eq!(s.countries, vec!["PL".to_string(), "IE".to_string()]);
    }

    #[test]
    fn empty_timezone_is_local() {
        assert_eq!(settings(&["--timezone", ""]).unwrap().zone, Zone::Local);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            settings(&["--bars", "-2"]).unwrap_err(),
            Error::InvalidArgument("Invalid number of bars: -2".into())
        );
        assert_eq!(
            settings(&["--countries", "PL,BLAH"]).unwrap_err(),
            Error::UnknownCountry("BLAH".into())
        );
        assert!(matches!(
            settings(&["--timezone", "Nowhere/Special"]).unwrap_err(),
            Error::UnknownTimeZone(_)
        ));
        assert!(settings(&["--end-hour", "24"]).is_err());
        assert!(Cli::try_parse_from(["weekend", "--at", "Friday"]).is_err());
    }
}
