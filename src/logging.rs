use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// Route this crate's log records to stderr with UTC timestamps.
pub fn init() -> Result<(), SetLoggerError> {
    SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level("bullbench", LevelFilter::Info)
        .with_utc_timestamps()
        .init()
}
