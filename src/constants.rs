use std::num::NonZeroUsize;

/// Program identity
pub const PROGRAM_NAME: &str = "bullbench";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target URL constants
pub const HTTP_SCHEME: &str = "http://";
pub const DEFAULT_PORT: u16 = 80;

/// Worker pool constants
pub const DEFAULT_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => panic!("default concurrency must be non-zero"),
};
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Source file type codes accepted by `-t`
pub const ACCESS_LOG_CODE: i64 = 1;
pub const GENERIC_CODE: i64 = 0;

/// Short flags that consume a value; `-h` is the only switch
pub const VALUE_FLAGS: [char; 7] = ['f', 'H', 'u', 'c', 't', 'r', 'o'];

/// HTTP methods recognized at the start of a request line
pub const HTTP_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "HEAD", "PATCH", "OPTIONS"];

/// Time conversion constants
pub const MICROSECONDS_PER_SECOND: u64 = 1_000_000;
