use reqwest::{Client, Method};

use crate::constants::HTTP_METHODS;

/// One request to replay against the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    pub method: Method,
    /// Origin-form target, always starting with `/`.
    pub target: String,
}

impl ReplayRequest {
    pub fn get(target: &str) -> Self {
        Self {
            method: Method::GET,
            target: origin_form(target),
        }
    }
}

/// Parse request line to extract method and target.
///
/// `"POST /login HTTP/1.1"` keeps its method, anything not led by a known
/// method is a GET of the whole trimmed line. Empty lines yield `None`.
pub fn parse_request_line(line: &str) -> Option<ReplayRequest> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut parts = line.split_whitespace();
    if let (Some(method), Some(target)) = (parts.next(), parts.next())
        && let Some(method) = known_method(method)
    {
        return Some(ReplayRequest {
            method,
            target: origin_form(target),
        });
    }

    Some(ReplayRequest::get(line))
}

/// Pull the request out of an nginx access log line.
///
/// The request is the first quoted field, e.g.
/// `1.2.3.4 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 612`.
/// Lines without a well formed request field (`"-"`, garbage) yield `None`.
pub fn parse_access_log_line(line: &str) -> Option<ReplayRequest> {
    let (_, rest) = line.split_once('"')?;
    let (request, _) = rest.split_once('"')?;

    let mut parts = request.split_whitespace();
    let method = known_method(parts.next()?)?;
    let target = parts.next()?;
    Some(ReplayRequest {
        method,
        target: origin_form(target),
    })
}

fn known_method(token: &str) -> Option<Method> {
    let upper = token.to_uppercase();
    if HTTP_METHODS.contains(&upper.as_str()) {
        Method::from_bytes(upper.as_bytes()).ok()
    } else {
        None
    }
}

fn origin_form(target: &str) -> String {
    if target.starts_with('/') {
        target.to_string()
    } else {
        format!("/{}", target)
    }
}

/// Build HTTP request for `request` against `url_prefix`
pub fn build_request(
    client: &Client,
    url_prefix: &str,
    request: &ReplayRequest,
) -> reqwest::RequestBuilder {
    client.request(
        request.method.clone(),
        format!("{}{}", url_prefix, request.target),
    )
}
