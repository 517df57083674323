use colored::*;
use reqwest::StatusCode;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::constants::MICROSECONDS_PER_SECOND;

/// Result of a single replayed request
#[derive(Debug)]
pub enum Outcome {
    Response(StatusCode),
    Error(String),
}

/// Aggregated results of a replay run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub sent: u64,
    pub succeeded: u64,
    /// Non 2xx/3xx responses, by status code.
    pub failed: BTreeMap<u16, u64>,
    pub errors: u64,
    /// Most recent transport error, kept for the report.
    pub last_error: Option<String>,
    pub elapsed: Duration,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.sent += 1;
        match outcome {
            Outcome::Response(status) if status.is_success() || status.is_redirection() => {
                self.succeeded += 1;
            }
            Outcome::Response(status) => {
                *self.failed.entry(status.as_u16()).or_default() += 1;
            }
            Outcome::Error(message) => {
                self.errors += 1;
                self.last_error = Some(message.clone());
            }
        }
    }

    pub fn requests_per_second(&self) -> f64 {
        let micros = self.elapsed.as_micros();
        if micros == 0 {
            return 0.0;
        }
        self.sent as f64 * MICROSECONDS_PER_SECOND as f64 / micros as f64
    }
}

/// Format the run summary as plain text output
pub fn format_summary(summary: &Summary, colored: bool) -> String {
    let failed_total: u64 = summary.failed.values().sum();
    let mut output = String::new();

    if colored {
        output.push_str(&format!(
            "Requests: {} | OK: {} | Failed: {} | Errors: {}\n",
            summary.sent.to_string().blue(),
            summary.succeeded.to_string().green(),
            failed_total.to_string().yellow(),
            summary.errors.to_string().red(),
        ));
    } else {
        output.push_str(&format!(
            "Requests: {} | OK: {} | Failed: {} | Errors: {}\n",
            summary.sent, summary.succeeded, failed_total, summary.errors,
        ));
    }

    for (code, count) in &summary.failed {
        output.push_str(&format!("  status {}: {}\n", code, count));
    }

    if let Some(message) = &summary.last_error {
        output.push_str(&format!("  last error: {}\n", message));
    }

    output.push_str(&format!(
        "Time: {:?} | {:.2} req/s\n",
        summary.elapsed,
        summary.requests_per_second()
    ));
    output
}
