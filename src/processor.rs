use anyhow::Result;
use futures::stream::{self, StreamExt};
use log::{debug, info};
use reqwest::Client;
use std::time::Instant;

use crate::config::RunConfig;
use crate::http::{ReplayRequest, build_http_client, build_request};
use crate::output::{Outcome, Summary};

/// Replay `requests` against the configured target.
///
/// At most `concurrency` requests are in flight at once. Every request is sent
/// exactly once and its outcome tallied; failures never abort the run.
pub async fn replay(config: &RunConfig, requests: Vec<ReplayRequest>) -> Result<Summary> {
    let client = build_http_client(config)?;
    let client = &client;
    let url_prefix = config.url_prefix();

    info!(
        "Replaying {} requests against {} ({}, port {}) with {} workers",
        requests.len(),
        url_prefix,
        config.address().ip(),
        config.port(),
        config.concurrency()
    );

    let start_time = Instant::now();
    let mut summary = stream::iter(requests)
        .map(move |request| send_request(client, url_prefix, request))
        .buffer_unordered(config.concurrency().get())
        .fold(Summary::default(), |mut summary, outcome| async move {
            summary.record(&outcome);
            summary
        })
        .await;
    summary.elapsed = start_time.elapsed();

    Ok(summary)
}

/// Send a single request and drain its body
async fn send_request(client: &Client, url_prefix: &str, request: ReplayRequest) -> Outcome {
    match build_request(client, url_prefix, &request).send().await {
        Ok(resp) => {
            let status = resp.status();
            // Drain so the connection goes back to the pool.
            if let Err(err) = resp.bytes().await {
                debug!("[{} {}] - body error: {}", request.method, request.target, err);
                return Outcome::Error(err.to_string());
            }
            debug!("[{} {}] -> {}", request.method, request.target, status);
            Outcome::Response(status)
        }
        Err(err) => {
            debug!("[{} {}] - Error: {}", request.method, request.target, err);
            Outcome::Error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Invocation, resolve};
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    /// Minimal keep-alive HTTP/1.1 server: 404 for `/missing*`, 200 otherwise.
    async fn serve(listener: TcpListener, hosts: Arc<Mutex<Vec<String>>>) {
        while let Ok((stream, _)) = listener.accept().await {
            let hosts = hosts.clone();
            tokio::spawn(async move {
                let mut reader = BufReader::new(stream);
                loop {
                    let mut request_line = String::new();
                    if reader.read_line(&mut request_line).await.unwrap_or(0) == 0 {
                        return;
                    }
                    let path = request_line
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .to_string();
                    loop {
                        let mut header = String::new();
                        if reader.read_line(&mut header).await.unwrap_or(0) == 0 {
                            return;
                        }
                        if header == "\r\n" {
                            break;
                        }
                        if let Some((name, value)) = header.split_once(':')
                            && name.eq_ignore_ascii_case("host")
                        {
                            hosts.lock().await.push(value.trim().to_string());
                        }
                    }
                    let status = if path.starts_with("/missing") {
                        "404 Not Found"
                    } else {
                        "200 OK"
                    };
                    let response = format!("HTTP/1.1 {}\r\ncontent-length: 2\r\n\r\nok", status);
                    if reader.get_mut().write_all(response.as_bytes()).await.is_err() {
                        return;
                    }
                }
            });
        }
    }

    fn config_for(args: &[&str]) -> RunConfig {
        match resolve(args.iter().copied()) {
            Ok(Invocation::Run(config)) => config,
            other => panic!("expected a run configuration, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_replay_tallies_responses() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let hosts = Arc::new(Mutex::new(Vec::new()));
        tokio::spawn(serve(listener, hosts.clone()));

        let url = format!("http://127.0.0.1:{}/ignored", port);
        let config = config_for(&[
            "bb",
            "-f",
            "x.log",
            "-u",
            &url,
            "-c",
            "2",
            "-H",
            "www.bullsoft.org",
        ]);
        let requests = vec![
            ReplayRequest::get("/ok"),
            ReplayRequest::get("/missing"),
            ReplayRequest::get("/ok?again=1"),
        ];

        let summary = replay(&config, requests).await.unwrap();
        assert_eq!(summary.sent, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed.get(&404), Some(&1));
        assert_eq!(summary.errors, 0);

        let hosts = hosts.lock().await;
        assert_eq!(hosts.len(), 3);
        assert!(hosts.iter().all(|host| host == "www.bullsoft.org"));
    }

    #[tokio::test]
    async fn test_replay_counts_transport_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("127.0.0.1:{}", port);
        let config = config_for(&["bb", "-f", "x.log", "-u", &url]);
        let summary = replay(&config, vec![ReplayRequest::get("/")]).await.unwrap();
        assert_eq!(summary.sent, 1);
        assert_eq!(summary.errors, 1);
        assert!(summary.last_error.is_some());
    }

    #[tokio::test]
    async fn test_replay_nothing() {
        let config = config_for(&["bb", "-f", "x.log", "-u", "127.0.0.1:9"]);
        let summary = replay(&config, Vec::new()).await.unwrap();
        assert_eq!(summary, Summary { elapsed: summary.elapsed, ..Summary::default() });
    }
}
