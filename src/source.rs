use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::RunConfig;
use crate::http::{ReplayRequest, parse_access_log_line, parse_request_line};
use crate::types::SourceKind;
use crate::utils::Extractor;

/// Read replayable requests from `reader`, one candidate per line.
///
/// With an extractor every line goes through it and non-matching lines are
/// skipped. Otherwise access logs yield their quoted request field and
/// generic files are taken line by line. Invalid UTF-8 is replaced, not fatal.
pub fn read_requests<R: BufRead>(
    reader: R,
    kind: SourceKind,
    extractor: Option<&Extractor>,
) -> io::Result<Vec<ReplayRequest>> {
    let mut requests = Vec::new();
    let mut skipped = 0usize;

    for raw_line in reader.split(b'\n') {
        let raw_line = raw_line?;
        let line = String::from_utf8_lossy(&raw_line);
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let request = match (extractor, kind) {
            (Some(extractor), _) => extractor
                .extract(line)
                .and_then(|extracted| parse_request_line(&extracted)),
            (None, SourceKind::AccessLog) => parse_access_log_line(line),
            (None, SourceKind::Generic) => parse_request_line(line),
        };

        match request {
            Some(request) => requests.push(request),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} lines without a request", skipped);
    }
    Ok(requests)
}

/// Load the requests named by the configuration's source file
pub fn load_requests(config: &RunConfig) -> Result<Vec<ReplayRequest>> {
    let path = config.source_path();
    let file = File::open(path).with_context(|| format!("Cannot open request file {}", path))?;
    let requests = read_requests(
        BufReader::new(file),
        config.source_kind(),
        config.extractor(),
    )
    .with_context(|| format!("Cannot read request file {}", path))?;

    info!("Loaded {} requests from {}", requests.len(), path);
    Ok(requests)
}
