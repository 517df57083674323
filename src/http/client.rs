use anyhow::Result;
use reqwest::{Client, redirect::Policy};
use std::net::SocketAddr;
use std::time::Duration;

use crate::config::RunConfig;
use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::http::headers::default_headers;

/// Build HTTP client from the resolved configuration.
///
/// The client is pinned to the already resolved address so no further DNS
/// lookups happen during the run.
pub fn build_http_client(config: &RunConfig) -> Result<Client> {
    let client_builder = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(Policy::none())
        .default_headers(default_headers(config.host_header()))
        .resolve(config.domain(), SocketAddr::V4(config.address()))
        .pool_max_idle_per_host(config.concurrency().get())
        .http1_only();

    Ok(client_builder.build()?)
}
