use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::Parser;
use std::path::PathBuf;

/// A guided terminal form for daily and weekly journal entries.
///
/// The base directory for saved entries comes from `METAJOURNAL_SAVE_PATH`.
/// The flags below only control diagnostic logging.
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Log output format
    #[clap(long, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON], default_value = LOG_FORMAT_TEXT)]
    pub log_format: String,

    /// Log level filter (overridden by RUST_LOG)
    #[clap(long)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["metajournal"]);
        assert_eq!(args.log_format, "text");
        assert!(!args.json_logs());
        assert!(args.log_level.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_log_options() {
        let args = CliArgs::parse_from(vec![
            "metajournal",
            "--log-format",
            "json",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/metajournal.log",
        ]);
        assert!(args.json_logs());
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/metajournal.log")));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let result = CliArgs::try_parse_from(vec!["metajournal", "--log-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        let result = CliArgs::try_parse_from(vec!["metajournal", "weekly"]);
        assert!(result.is_err());
    }
}
