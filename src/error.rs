use std::io;

use thiserror::Error;

/// Reasons a run configuration cannot be produced
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Illegal arguments: {0}")]
    Arguments(String),

    #[error("Illegal file name")]
    EmptySourcePath,

    #[error("Illegal file type: {0}")]
    InvalidSourceKind(String),

    #[error("Illegal url prefix")]
    EmptyUrlPrefix,

    #[error("Unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Illegal url prefix: {0}")]
    EmptyDomain(String),

    #[error("Invalid domain name: {domain}")]
    UnresolvableDomain {
        domain: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
