//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "carteira",
    version,
    about = "Import client, portfolio and task spreadsheets exported as CSV",
    long_about = "Detect, parse and validate CSV exports of the client portfolio.\n\n\
                  `parse` extracts whatever rows it can from a known layout.\n\
                  `validate-clients` and `validate-contracts` check an import file\n\
                  row by row and report every problem before anything is saved."
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

    /// Log output format.
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

    /// Include cell values (personal data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the schema detected from a file's header.
    Detect(FileArgs),

    /// Best-effort import of a known spreadsheet layout.
    Parse(ParseArgs),

    /// Validate a client import file.
    ValidateClients(ValidateClientsArgs),

    /// Validate a contract import file against existing clients and catalog.
    ValidateContracts(ValidateContractsArgs),

    /// List the known layouts and import headers.
    Schemas,
}

#[derive(Args)]
pub struct FileArgs {
    /// CSV file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Print the imported records as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Print the full validation result as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Also write the errors to a CSV file (linha,campo,valor,mensagem).
    #[arg(long = "errors-csv", value_name = "PATH")]
    pub errors_csv: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateClientsArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Verify CPF/CNPJ check digits instead of only their length.
    #[arg(long = "strict-tax-id")]
    pub strict_tax_id: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args)]
pub struct ValidateContractsArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// JSON file with the existing `clientes`, `areas`, `servicos` and
    /// `produtos`.
    #[arg(long = "references", value_name = "JSON")]
    pub references: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
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
