//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_UTC_OFFSET_MINUTES,
};
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the CLI.
///
/// # Examples
///
/// ```no_run
/// use phishing_report::Config;
///
/// let config = Config {
///     service_url: "http://analysis.internal:8000".to_string(),
///     strict_schema: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service
    pub service_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// UTC offset, in minutes, used when displaying timestamps
    pub utc_offset_minutes: i32,

    /// Reject service payloads that violate the record schema instead of
    /// logging a warning
    pub strict_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            strict_schema: false,
        }
    }
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "phishing_report",
    version,
    about = "Classify, summarize and export phishing analyses from the analysis service"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Base URL of the analysis service
    #[arg(long, env = "PHISHING_SERVICE_URL", default_value = DEFAULT_SERVICE_URL, global = true)]
    pub service_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "PHISHING_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// UTC offset in minutes for displayed timestamps
    #[arg(
        long,
        env = "PHISHING_UTC_OFFSET_MINUTES",
        default_value_t = DEFAULT_UTC_OFFSET_MINUTES,
        allow_negative_numbers = true,
        global = true
    )]
    pub utc_offset_minutes: i32,

    /// Reject service responses that violate the record schema
    #[arg(long, env = "PHISHING_STRICT_SCHEMA", global = true)]
    pub strict_schema: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a URL for analysis and show the verdict
    Analyze {
        /// URL or bare domain to analyze
        url: String,
        /// Print the raw record as JSON instead of the field table
        #[arg(long)]
        json: bool,
    },
    /// Show the analysis history as a table
    History {
        /// Number of records to skip
        #[arg(long, default_value_t = 0)]
        skip: u32,
        /// Maximum number of records to fetch
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },
    /// Show aggregate statistics over the history
    Summary {
        /// Maximum number of records to fetch
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the history as a spreadsheet (XLSX or CSV) or JSON Lines
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Maximum number of records to fetch
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },
}

impl From<&GlobalArgs> for Config {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            service_url: args.service_url.clone(),
            timeout_seconds: args.timeout_seconds,
            log_level: args.log_level.clone(),
            log_format: args.log_format.clone(),
            utc_offset_minutes: args.utc_offset_minutes,
            strict_schema: args.strict_schema,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.service_url, "http://localhost:8000");
        assert_eq!(config.timeout_seconds, 60);
        assert_eq!(config.utc_offset_minutes, -180);
        assert!(!config.strict_schema);
        assert!(config.user_agent.starts_with("phishing_report/"));
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from(["phishing_report", "analyze", "example.com"])
            .expect("analyze should parse");
        match cli.command {
            Command::Analyze { url, json } => {
                assert_eq!(url, "example.com");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "phishing_report",
            "summary",
            "--json",
            "--service-url",
            "http://10.0.0.5:9000",
            "--utc-offset-minutes",
            "-60",
        ])
        .expect("summary should parse");
        let config = Config::from(&cli.global);
        assert_eq!(config.service_url, "http://10.0.0.5:9000");
        assert_eq!(config.utc_offset_minutes, -60);
        assert!(matches!(cli.command, Command::Summary { json: true, .. }));
    }

    #[test]
    fn test_cli_logging_options_reach_config() {
        let cli = Cli::try_parse_from([
            "phishing_report",
            "history",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .expect("history should parse");
        let config = Config::from(&cli.global);
        assert!(matches!(config.log_level, LogLevel::Debug));
        assert!(matches!(config.log_format, LogFormat::Json));
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_cli_export_defaults_to_workbook() {
        let cli = Cli::try_parse_from(["phishing_report", "export", "-o", "history.xlsx"])
            .expect("export should parse");
        match cli.command {
            Command::Export { format, .. } => {
                assert_eq!(format, ExportFormat::Xlsx);
                assert_eq!(format.extension(), "xlsx");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_export_format() {
        let cli = Cli::try_parse_from([
            "phishing_report",
            "export",
            "--format",
            "jsonl",
            "-o",
            "history.jsonl",
        ])
        .expect("export should parse");
        match cli.command {
            Command::Export { format, output, .. } => {
                assert_eq!(format, ExportFormat::Jsonl);
                assert_eq!(output, Some(PathBuf::from("history.jsonl")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["phishing_report"]).is_err());
    }
}
