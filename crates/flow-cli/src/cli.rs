//! Command-line arguments for `iqvia-flow`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use flow_cli::RunConfig;
use flow_profile::ProfilerConfig;

#[derive(Parser)]
#[command(
    name = "iqvia-flow",
    version,
    about = "IQVIA Flow - profile CSV files against a metadata master",
    long_about = "Profile raw CSV files against a metadata master file.\n\n\
                  Each file gets a self-contained HTML data quality report with\n\
                  null, duplicate, sensitive, encryption and currency checks,\n\
                  numeric statistics and a weighted quality score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile every CSV under an input directory.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Metadata master CSV describing the expected columns of each file.
    #[arg(long = "metadata", value_name = "CSV")]
    pub metadata: PathBuf,

    /// Directory searched recursively for CSV files.
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory for the generated reports (created if missing).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Also write each report as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Currency used to validate currency columns.
    #[arg(long = "currency", value_enum, default_value = "usd")]
    pub currency: CurrencyArg,

    /// Treat columns whose names look like amounts or prices as currency.
    #[arg(long = "detect-currency-by-name")]
    pub detect_currency_by_name: bool,

    /// Fixed "Generated" text for every report instead of the current time.
    #[arg(long = "timestamp", value_name = "TEXT")]
    pub timestamp: Option<String>,

    /// Exit with status 1 if any file was skipped.
    #[arg(long = "fail-on-skip")]
    pub fail_on_skip: bool,
}

impl ProfileArgs {
    pub fn run_config(&self) -> RunConfig {
        let mut profiler = ProfilerConfig::default()
            .with_currency(self.currency.code())
            .with_detect_currency_by_name(self.detect_currency_by_name);
        if let Some(timestamp) = &self.timestamp {
            profiler = profiler.with_report_timestamp(timestamp.clone());
        }
        RunConfig {
            metadata: self.metadata.clone(),
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            write_json: self.json,
            fail_on_skip: self.fail_on_skip,
            profiler,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl CurrencyArg {
    fn code(self) -> &'static str {
        match self {
            CurrencyArg::Usd => "USD",
            CurrencyArg::Eur => "EUR",
            CurrencyArg::Gbp => "GBP",
            CurrencyArg::Inr => "INR",
        }
    }
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

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn profile_args_build_run_config() {
        let cli = Cli::parse_from([
            "iqvia-flow",
            "profile",
            "--metadata",
            "master.csv",
            "--input-dir",
            "raw",
            "--output-dir",
            "out",
            "--currency",
            "eur",
            "--timestamp",
            "fixed",
            "--json",
        ]);
        let Command::Profile(args) = cli.command;
        let config = args.run_config();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.write_json);
        assert!(!config.fail_on_skip);
        assert_eq!(config.profiler.currency(), "EUR");
        assert_eq!(config.profiler.report_timestamp(), Some("fixed"));
    }
}
