//! CLI argument definitions for the payslip generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "boletas",
    version,
    about = "Payroll CSV normalizer and payslip generator",
    long_about = "Normalize Peruvian payroll CSV exports and generate payslips.\n\n\
                  Column headers are matched against known spelling variants, amounts\n\
                  and periods are parsed with local conventions, and one payslip is\n\
                  written per valid employee row."
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

    /// Include employee names and DNIs in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a payroll CSV and summarize every row.
    Process(ProcessArgs),

    /// Show how the CSV headers map onto payroll fields.
    Columns(ColumnsArgs),

    /// Write a ZIP archive with one payslip per valid row.
    Export(ExportArgs),
}

/// Options shared by every command that normalizes rows.
#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the payroll CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Date used when a period cannot be read (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,

    /// Normalize rows on a single thread.
    #[arg(long = "sequential")]
    pub sequential: bool,
}

#[derive(Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: NormalizeArgs,

    /// Print processed records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Only list rows that failed validation.
    #[arg(long = "invalid-only")]
    pub invalid_only: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the payroll CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: NormalizeArgs,

    /// Archive path (default: Boletas_Pago_<date>.zip next to the CSV).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Employer name printed on every payslip.
    #[arg(long = "employer", value_name = "NAME")]
    pub employer: Option<String>,
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
