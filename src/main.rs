mod config;
mod constants;
mod error;
mod http;
mod logging;
mod output;
mod processor;
mod source;
mod types;
mod utils;

use anyhow::Result;
use colored::*;
use log::info;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use crate::config::{Invocation, RunConfig};
use crate::constants::{PROGRAM_NAME, PROGRAM_VERSION};
use crate::output::format_summary;

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("[Warning] Logging disabled: {}", err);
    }

    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let config = match config::resolve(args) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Usage) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{} {}", "Fatal:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("{}", types::usage_text());
}

fn run(config: RunConfig) -> Result<()> {
    info!(
        "{} {}: target {} ({}:{}), source {} (type {})",
        PROGRAM_NAME,
        PROGRAM_VERSION,
        config.url_prefix(),
        config.domain(),
        config.port_text(),
        config.source_path(),
        config.source_kind().code()
    );
    if let Some(extractor) = config.extractor() {
        info!(
            "Extracting requests with {:?} -> {:?}",
            extractor.pattern(),
            config.replacement()
        );
    }

    let requests = source::load_requests(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let summary = runtime.block_on(processor::replay(&config, requests))?;

    let colored = io::stdout().is_terminal();
    print!("{}", format_summary(&summary, colored));
    Ok(())
}
