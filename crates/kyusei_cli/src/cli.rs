use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use kyusei_time::CalendarDate;

/// Nine-Star-Ki calendar and direction fortunes.
#[derive(Parser)]
#[command(name = "kyusei", version, about = "Nine-Star-Ki calendar and direction fortunes")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stars, pillars and inclination of a birth date
    Profile {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: CalendarDate,
        /// Also show the stars of this date
        #[arg(long)]
        current: Option<CalendarDate>,
    },
    /// Locate a date in the Qi calendar
    QiDate {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: CalendarDate,
    },
    /// Major terms, solstices and doyou windows of a Qi year
    SolarTerms {
        /// Qi year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },
    /// Star board of a date
    Board {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: CalendarDate,
        /// Which board to show
        #[arg(long, value_enum, default_value = "year")]
        level: Level,
    },
    /// Solstice-anchored day stars for a date range
    DayStars {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: CalendarDate,
        /// Last date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: CalendarDate,
    },
    /// Direction fortunes of a target date for a birth date
    Fortune {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: CalendarDate,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: CalendarDate,
        /// Greatest lucky stars, comma separated
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=9))]
        max: Vec<u8>,
        /// Lucky stars, comma separated (defaults to the birth star's own lucky stars)
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=9))]
        big: Vec<u8>,
        /// TOML file switching labels off
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Quick lucky-direction check over the year and month boards
    Kichihoui {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: CalendarDate,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: CalendarDate,
    },
    /// Stars compatible with a star
    Lucky {
        /// Star index 1-9
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        star: u8,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Level {
    Year,
    Month,
    Day,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_fortune_lists() {
        let cli = Cli::try_parse_from([
            "kyusei", "fortune", "--birth", "1990-05-15", "--target", "2024-06-20", "--big",
            "3,4", "--max", "6",
        ])
        .unwrap();
        match cli.command {
            Command::Fortune { big, max, .. } => {
                assert_eq!(big, vec![3, 4]);
                assert_eq!(max, vec![6]);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn rejects_bad_dates_and_stars() {
        assert!(Cli::try_parse_from(["kyusei", "qi-date", "--date", "2023-02-30"]).is_err());
        assert!(Cli::try_parse_from(["kyusei", "lucky", "--star", "10"]).is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["kyusei", "-vv", "lucky", "--star", "1"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.json);
    }
}
