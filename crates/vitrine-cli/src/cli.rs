//! Argument parsing, logging setup and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::{debug, info};
use vitrine_telemetry::{
    DEFAULT_LOG_LEVEL, GlobalContextGuard, LogFormat, LoggingConfig, init_logging,
    log_format_from_config,
};
use vitrine_ui::config::LibraryConfig;

use crate::commands;
use crate::error::CliResult;

#[derive(Parser, Debug)]
#[command(
    name = "vitrine",
    about = "Exercise the Vitrine selection and table engines against JSON data"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "VITRINE_CONFIG",
        help = "Library configuration document (JSON)"
    )]
    pub(crate) config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "VITRINE_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level or filter directive; RUST_LOG takes precedence"
    )]
    pub(crate) log_level: String,
    #[arg(
        long,
        global = true,
        value_parser = parse_log_format,
        help = "Log output format (pretty or json)"
    )]
    pub(crate) log_format: Option<LogFormat>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for command results"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Filter a list of items and apply picks to a selection.
    Select(SelectArgs),
    /// Sort and paginate an array of JSON objects.
    Table(TableArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct SelectArgs {
    #[arg(long, help = "JSON array of {id, label, disabled?} items")]
    pub(crate) items: PathBuf,
    #[arg(long, default_value = "", help = "Search text typed into the picker")]
    pub(crate) query: String,
    #[arg(long, help = "Allow several items to be selected")]
    pub(crate) multi: bool,
    #[arg(long, help = "Offer the query itself as an option")]
    pub(crate) allow_custom: bool,
    #[arg(long, help = "Clear a single selection when its item is picked again")]
    pub(crate) allow_deselect: bool,
    #[arg(
        long = "pick",
        help = "Item id to click, in order; repeat for several clicks"
    )]
    pub(crate) picks: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TableArgs {
    #[arg(long, help = "JSON array of row objects; columns follow the first row's keys")]
    pub(crate) rows: PathBuf,
    #[arg(long, help = "Column key to sort by")]
    pub(crate) sort: Option<String>,
    #[arg(long, requires = "sort", help = "Sort in descending order")]
    pub(crate) desc: bool,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Page to show (clamped into range); enables paging"
    )]
    pub(crate) page: Option<i64>,
    #[arg(long, help = "Rows per page; enables paging")]
    pub(crate) rows_per_page: Option<usize>,
    #[arg(long, help = "Hide the leading row-number column")]
    pub(crate) no_numeration: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Parses CLI arguments, executes the requested command and reports errors.
/// Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn execute(cli: Cli) -> CliResult<()> {
    let raw_config = cli
        .config
        .as_deref()
        .map(|path| commands::read_json::<Value>(path, "configuration"))
        .transpose()?;

    let format = cli
        .log_format
        .or_else(|| log_format_from_config(raw_config.as_ref()))
        .unwrap_or_else(LogFormat::infer);
    let logging = LoggingConfig {
        level: &cli.log_level,
        format,
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }
    let _context = GlobalContextGuard::new(command_label(&cli.command));

    let config = match raw_config {
        Some(value) => LibraryConfig::from_value(value)?,
        None => LibraryConfig::default(),
    };
    debug!(?config, "library configuration loaded");

    let result = dispatch(&cli, &config);
    if result.is_ok() {
        info!(command = command_label(&cli.command), "command completed");
    }
    result
}

fn dispatch(cli: &Cli, config: &LibraryConfig) -> CliResult<()> {
    match &cli.command {
        Command::Select(args) => commands::select::handle_select(args, config, cli.output),
        Command::Table(args) => commands::table::handle_table(args, config, cli.output),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse().map_err(|err: anyhow::Error| err.to_string())
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Select(_) => "select",
        Command::Table(_) => "table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_parse_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "select",
            "--items",
            "cities.json",
            "--pick",
            "1",
            "--pick",
            "lyon",
            "--output",
            "json",
            "--log-format",
            "json",
        ])
        .expect("valid arguments");
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        let Command::Select(args) = cli.command else {
            panic!("expected select command");
        };
        assert_eq!(args.picks, vec!["1".to_string(), "lyon".to_string()]);
        assert!(args.query.is_empty());
    }

    #[test]
    fn table_accepts_negative_pages_and_requires_sort_for_desc() {
        let cli = Cli::try_parse_from(["vitrine", "table", "--rows", "r.json", "--page", "-5"])
            .expect("valid arguments");
        let Command::Table(args) = cli.command else {
            panic!("expected table command");
        };
        assert_eq!(args.page, Some(-5));

        assert!(Cli::try_parse_from(["vitrine", "table", "--rows", "r.json", "--desc"]).is_err());
    }

    #[test]
    fn unknown_log_formats_are_rejected() {
        assert!(
            Cli::try_parse_from(["vitrine", "table", "--rows", "r.json", "--log-format", "xml"])
                .is_err()
        );
    }

    #[test]
    fn command_labels_are_stable() {
        assert_eq!(
            command_label(&Command::Select(SelectArgs::default())),
            "select"
        );
        assert_eq!(command_label(&Command::Table(TableArgs::default())), "table");
    }
}
