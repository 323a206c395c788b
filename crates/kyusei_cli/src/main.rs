mod cli;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use kyusei_base::{Kyusei, LuckyStars};
use kyusei_config::FortuneConfig;
use kyusei_rs::{
    fortunes_between_with_config, quick_direction_check, resolve_day_star, resolve_day_star_precise,
    resolve_month_star, resolve_year_star, star_profile,
};
use kyusei_time::QiDate;
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command, Level};
use crate::report::{
    BoardReport, FortuneReport, LuckyReport, QiDateReport, SolarTermsReport, render_day_stars,
    render_profile, render_quick_check,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command, cli.json) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Print `value` as pretty JSON, or `text()` otherwise.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn run(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Profile { date, current } => {
            let profile = star_profile(date, current)
                .with_context(|| format!("cannot build profile for {date}"))?;
            emit(json, &profile, render_profile)
        }

        Command::QiDate { date } => {
            let report = QiDateReport::from(QiDate::of(date));
            emit(json, &report, |r| r.to_string())
        }

        Command::SolarTerms { year } => {
            let report = SolarTermsReport::new(year);
            emit(json, &report, |r| r.to_string())
        }

        Command::Board { date, level } => {
            let (name, star) = match level {
                Level::Year => ("year", resolve_year_star(date)),
                Level::Month => ("month", resolve_month_star(date)),
                Level::Day => (
                    "day",
                    resolve_day_star(date)
                        .with_context(|| format!("cannot resolve day star for {date}"))?
                        .star,
                ),
            };
            let report = BoardReport::new(date, name, star);
            emit(json, &report, |r| r.to_string())
        }

        Command::DayStars { from, to } => {
            let records = resolve_day_star_precise(from, to)
                .with_context(|| format!("cannot walk day stars from {from} to {to}"))?;
            info!(count = records.len(), "day stars resolved");
            emit(json, &records, |r| render_day_stars(r))
        }

        Command::Fortune {
            birth,
            target,
            max,
            big,
            config,
        } => {
            let lucky = if max.is_empty() && big.is_empty() {
                LuckyStars::from_own_lucky(resolve_year_star(birth))
            } else {
                LuckyStars::new(max, big)
            };
            let config = match config {
                Some(path) => FortuneConfig::load(&path)
                    .with_context(|| format!("cannot load {}", path.display()))?,
                None => FortuneConfig::default(),
            };
            let fortunes = fortunes_between_with_config(birth, target, &lucky, &config)
                .context("cannot evaluate direction fortunes")?;
            let report = FortuneReport {
                birth,
                target,
                fortunes,
            };
            emit(json, &report, |r| r.to_string())
        }

        Command::Kichihoui { birth, target } => {
            let check = quick_direction_check(birth, target);
            emit(json, &check, render_quick_check)
        }

        Command::Lucky { star } => {
            let star = Kyusei::from_index(star).context("star index must be 1-9")?;
            let lucky = star.lucky_stars();
            let report = LuckyReport {
                star: star.into(),
                text: kyusei_base::stars_to_text(&lucky),
                lucky_stars: lucky,
            };
            emit(json, &report, |r| r.to_string())
        }
    }
}
