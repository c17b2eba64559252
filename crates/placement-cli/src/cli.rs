//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use placement_model::KeyNormalization;

#[derive(Parser)]
#[command(
    name = "placement",
    version,
    about = "Placement analytics - summarize placement results by site and field",
    long_about = "Summarize a placement results spreadsheet.\n\n\
                  Reads CSV or workbook files (xlsx, xlsm, xls, ods), finds the site,\n\
                  field and score columns by their Hebrew or English headers, and\n\
                  reports counts per site, counts per field and mean score per site."
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

    /// Allow cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a results file.
    Analyze(AnalyzeArgs),

    /// List the header names recognized for each column role.
    Aliases,

    /// Show the lecturer dashboard counters.
    Dashboard(DashboardArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Results file (.csv, .xlsx, .xlsm, .xls or .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How grouping keys are compared (default: ANALYTICS_KEY_NORMALIZATION or exact).
    #[arg(long = "key-normalization", value_enum)]
    pub key_normalization: Option<KeyNormalizationArg>,

    /// Maximum number of data rows (default: ANALYTICS_MAX_ROWS or 100000).
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Maximum file size in bytes.
    #[arg(long = "max-upload-bytes", value_name = "N")]
    pub max_upload_bytes: Option<u64>,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Directory holding one CSV export per sheet, named after the sheet title.
    #[arg(long = "sheets-dir", value_name = "DIR", default_value = ".")]
    pub sheets_dir: PathBuf,

    /// Only read a sheet when its GCP_CREDS / GCP_CREDS_2 credentials are valid.
    #[arg(long = "require-credentials")]
    pub require_credentials: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeyNormalizationArg {
    Exact,
    Trim,
    TrimCaseFold,
}

impl From<KeyNormalizationArg> for KeyNormalization {
    fn from(value: KeyNormalizationArg) -> Self {
        match value {
            KeyNormalizationArg::Exact => Self::Exact,
            KeyNormalizationArg::Trim => Self::Trim,
            KeyNormalizationArg::TrimCaseFold => Self::TrimCaseFold,
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
