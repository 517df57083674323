use log::warn;
use reqwest::header::{HOST, HeaderMap, HeaderValue};

/// Default headers for every replayed request.
///
/// Carries the `-H` Host override; an invalid value is dropped with a warning
/// and the client falls back to the domain from the url prefix.
pub fn default_headers(host: Option<&str>) -> HeaderMap {
    let mut header_map = HeaderMap::new();
    if let Some(host) = host {
        match HeaderValue::from_str(host.trim()) {
            Ok(value) => {
                header_map.insert(HOST, value);
            }
            Err(_) => warn!("Invalid Host header value: {:?}", host),
        }
    }
    header_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_override() {
        let header_map = default_headers(Some("www.bullsoft.org"));
        assert_eq!(header_map.len(), 1);
        assert_eq!(header_map.get(HOST).unwrap(), "www.bullsoft.org");
    }

    #[test]
    fn test_no_override() {
        assert!(default_headers(None).is_empty());
    }

    #[test]
    fn test_invalid_host_is_dropped() {
        let header_map = default_headers(Some("bad\nhost"));
        assert!(header_map.is_empty());
    }
}
