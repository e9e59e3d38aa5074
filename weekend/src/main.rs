use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use weekend::calendar::CalendarRegistry;
use weekend::config::{Cli, Settings};
use weekend::core::SystemClock;
use weekend::logging::init_logger;
use weekend::report::build_report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.log_json);

    let registry = CalendarRegistry::with_builtin();
    let settings = Settings::from_cli(&cli, &registry).context("invalid settings")?;
    info!(
        zone = %settings.zone,
        start_hour = settings.schedule.start_hour(),
        end_hour = settings.schedule.end_hour(),
        countries = ?settings.countries,
        "computing weekend report"
    );

    let report = build_report(&settings, SystemClock, &registry)
        .context("failed to build the weekend report")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}
