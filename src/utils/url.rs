use crate::constants::{DEFAULT_PORT, HTTP_SCHEME};
use crate::error::ConfigError;
use crate::utils::number::parse_leading_int;

/// Origin pulled out of a url prefix: the part between the scheme and the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub domain: String,
    /// Text after the first `:`, if there was one. Not validated here.
    pub port_text: Option<String>,
}

/// Normalize URL by adding the http scheme if missing
pub fn normalize_url_scheme(url_str: &str) -> String {
    let trimmed_url = url_str.trim();
    match strip_http_scheme(trimmed_url) {
        Some(rest) => format!("{}{}", HTTP_SCHEME, rest),
        None => format!("{}{}", HTTP_SCHEME, trimmed_url),
    }
}

fn strip_http_scheme(url_str: &str) -> Option<&str> {
    let scheme = url_str.get(..HTTP_SCHEME.len())?;
    if scheme.eq_ignore_ascii_case(HTTP_SCHEME) {
        url_str.get(HTTP_SCHEME.len()..)
    } else {
        None
    }
}

/// Split a user supplied url prefix into domain and optional port text.
///
/// The scheme is optional and only `http` is accepted. Everything from the
/// first `/`, `?` or `#` after the authority is discarded.
pub fn split_url_prefix(raw: &str) -> Result<Authority, ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::EmptyUrlPrefix);
    }

    let normalized = normalize_url_scheme(raw);
    let rest = &normalized[HTTP_SCHEME.len()..];
    if let Some((scheme, _)) = rest.split_once("://")
        && !scheme.contains(['/', '?', '#'])
    {
        // "https://host" has no http marker and would otherwise become domain "https"
        return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
    }

    let authority = match rest.find(['/', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let (domain, port_text) = match authority.split_once(':') {
        Some((domain, port)) => (domain, Some(port.to_string())),
        None => (authority, None),
    };

    if domain.is_empty() {
        return Err(ConfigError::EmptyDomain(raw.to_string()));
    }

    Ok(Authority {
        domain: domain.to_string(),
        port_text,
    })
}

/// Parse an explicit port from its leading digits, `atoi` style.
///
/// `8080abc` reads as 8080. Zero, negative, out of range and non-numeric text
/// yield `None`.
pub fn parse_port(port_text: &str) -> Option<u16> {
    u16::try_from(parse_leading_int(port_text))
        .ok()
        .filter(|port| *port != 0)
}

/// Port picked for the target, plus the diagnostic when the text was unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortChoice {
    pub port: u16,
    pub text: String,
    pub warning: Option<String>,
}

/// Pick the target port. No port text means the default without a warning;
/// unusable text means the default with one.
pub fn select_port(port_text: Option<&str>) -> PortChoice {
    let default = PortChoice {
        port: DEFAULT_PORT,
        text: DEFAULT_PORT.to_string(),
        warning: None,
    };
    let Some(text) = port_text else {
        return default;
    };

    match parse_port(text) {
        Some(port) => PortChoice {
            port,
            text: port.to_string(),
            warning: None,
        },
        None => PortChoice {
            warning: Some(format!("Illegal port {:?}, using {}", text, DEFAULT_PORT)),
            ..default
        },
    }
}
