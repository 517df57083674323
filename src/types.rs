use clap::{ArgAction, CommandFactory, Parser};

use crate::constants::{ACCESS_LOG_CODE, GENERIC_CODE};

const USAGE_EXAMPLES: &str = r#"Example 1:  bullbench -f /var/log/nginx/access.log -u http://127.0.0.1:8080
Example 2:  bullbench -f /var/log/nginx/access.log -u http://127.0.0.1:8080 -H www.bullsoft.org
Example 3:  bullbench -f data_file.log -u http://127.0.0.1:8080 -t 0 -r "[a-z]*([0-9]+)([a-z]*)" -o "/display?a=\$1&b=\$2""#;

/// Kind of request file handed to `-f`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// nginx combined access log, the request line is the first quoted field.
    #[default]
    AccessLog,
    /// Anything else, one request per line or pulled out with `-r`.
    Generic,
}

impl SourceKind {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            ACCESS_LOG_CODE => Some(SourceKind::AccessLog),
            GENERIC_CODE => Some(SourceKind::Generic),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            SourceKind::AccessLog => ACCESS_LOG_CODE,
            SourceKind::Generic => GENERIC_CODE,
        }
    }
}

/// CLI arguments structure
///
/// Every option is kept as raw text; range checks and fallbacks happen in
/// [`crate::config::resolve`] so that they can report precise errors.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "bullbench",
    version,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    help_template = "\n{name} {version}\n{options}\n{after-help}",
    after_help = USAGE_EXAMPLES
)]
pub struct Cli {
    /// Request file path, maybe an nginx access log.
    #[arg(short = 'f', value_name = "filename", allow_hyphen_values = true)]
    pub file: Option<String>,

    /// Request file type, 1 for nginx access log, 0 for others. Default is 1.
    #[arg(short = 't', value_name = "num", allow_hyphen_values = true)]
    pub file_type: Option<String>,

    /// Request url prefix, https is not supported. E.g. http://www.bullsoft.org
    #[arg(short = 'u', value_name = "url", allow_hyphen_values = true)]
    pub url: Option<String>,

    /// HTTP request header Host. Default is none.
    #[arg(short = 'H', value_name = "host", allow_hyphen_values = true)]
    pub host: Option<String>,

    /// Number of concurrent workers. Default is 1000.
    #[arg(short = 'c', value_name = "num", allow_hyphen_values = true)]
    pub concurrency: Option<String>,

    /// Regex used to extract the request string from each line. Meant for '-t 0'.
    #[arg(short = 'r', value_name = "regex", allow_hyphen_values = true)]
    pub regex: Option<String>,

    /// Uri built from the regex captured groups, supports $0-$9.
    #[arg(short = 'o', value_name = "string", allow_hyphen_values = true)]
    pub output_uri: Option<String>,

    /// Print this help and exit.
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,

    /// Stray operands, accepted and ignored.
    #[arg(hide = true)]
    pub operands: Vec<String>,
}

/// Usage text printed for `-h` and for an empty command line
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}
