//! CLI argument definitions for the numerology tool.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "numerology",
    version,
    about = "Numerology figures with auditable calculation lines",
    long_about = "Compute a complete set of numerology figures from civil-state data.\n\n\
                  Every figure comes with the literal arithmetic that produced it.\n\
                  Birth dates must be given as DD/MM/YYYY."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names and birth dates to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute every figure for one person.
    Compute(ComputeArgs),

    /// Print the act and cycle start-age table.
    Recap,
}

#[derive(Parser)]
pub struct ComputeArgs {
    /// Usual first name.
    #[arg(long = "first-name", value_name = "NAME")]
    pub first_name: String,

    /// Additional given names, space separated.
    #[arg(long = "middle-names", value_name = "NAMES")]
    pub middle_names: Option<String>,

    /// Family name at birth.
    #[arg(long = "family-name", value_name = "NAME")]
    pub family_name: String,

    /// Family name after marriage.
    #[arg(long = "marital-name", value_name = "NAME")]
    pub marital_name: Option<String>,

    /// Birth date as DD/MM/YYYY.
    #[arg(long = "birth-date", value_name = "DD/MM/YYYY")]
    pub birth_date: String,

    /// Birth place (echoed in the output only).
    #[arg(long = "birth-place", value_name = "PLACE")]
    pub birth_place: Option<String>,

    /// Year for the personal-year figure (default: current year).
    #[arg(long = "target-year", value_name = "YYYY")]
    pub target_year: Option<u32>,

    /// Include the per-token letter breakdown (`NUMEROLOGY_DEBUG=1` also works).
    #[arg(
        long = "debug",
        env = "NUMEROLOGY_DEBUG",
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,

    /// TOML file with extra Y overrides (`[overrides]` table of TOKEN = "vowel"|"consonant").
    #[arg(long = "y-overrides", value_name = "FILE")]
    pub y_overrides: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Summary tables.
    Table,
    /// Full result as JSON.
    Json,
    /// Calculation lines only.
    Traces,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const ARGS: [&str; 8] = [
        "numerology",
        "compute",
        "--first-name",
        "Yves",
        "--family-name",
        "Dupont",
        "--birth-date",
        "15/06/1990",
    ];

    fn parse_debug() -> bool {
        let cli = Cli::try_parse_from(ARGS).unwrap();
        match cli.command {
            Command::Compute(args) => args.debug,
            Command::Recap => panic!("expected compute"),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    // Only test in this binary touching NUMEROLOGY_DEBUG.
    #[test]
    #[allow(unsafe_code)]
    fn debug_env_accepts_numeric_switch() {
        unsafe { std::env::set_var("NUMEROLOGY_DEBUG", "1") };
        assert!(parse_debug());
        unsafe { std::env::set_var("NUMEROLOGY_DEBUG", "0") };
        assert!(!parse_debug());
        unsafe { std::env::set_var("NUMEROLOGY_DEBUG", "true") };
        assert!(parse_debug());
        unsafe { std::env::remove_var("NUMEROLOGY_DEBUG") };
        assert!(!parse_debug());

        let mut with_flag = ARGS.to_vec();
        with_flag.push("--debug");
        let cli = Cli::try_parse_from(with_flag).unwrap();
        assert!(matches!(cli.command, Command::Compute(args) if args.debug));
    }
}
