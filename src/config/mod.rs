pub mod args;

use std::net::SocketAddrV4;
use std::num::NonZeroUsize;

use clap::Parser;
use log::{debug, warn};

use crate::constants::{DEFAULT_CONCURRENCY, DEFAULT_PORT, HTTP_SCHEME};
use crate::error::ConfigError;
use crate::types::{Cli, SourceKind};
use crate::utils::{
    Extractor, NameResolver, SystemResolver, compile_pattern, parse_leading_int,
    resolve_address, select_port, split_url_prefix,
};

/// What the command line asks for
#[derive(Debug)]
pub enum Invocation {
    /// No arguments or `-h`: print usage and exit successfully.
    Usage,
    Run(RunConfig),
}

/// Fully resolved run settings. Built once by [`resolve`] and never changed.
#[derive(Debug)]
pub struct RunConfig {
    source_path: String,
    source_kind: SourceKind,
    host_header: Option<String>,
    url_prefix: String,
    domain: String,
    port: u16,
    port_text: String,
    address: SocketAddrV4,
    concurrency: NonZeroUsize,
    extractor: Option<Extractor>,
    replacement: String,
}

impl RunConfig {
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn host_header(&self) -> Option<&str> {
        self.host_header.as_deref()
    }

    /// `http://domain[:port]`, without any path.
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn port_text(&self) -> &str {
        &self.port_text
    }

    pub fn address(&self) -> SocketAddrV4 {
        self.address
    }

    pub fn concurrency(&self) -> NonZeroUsize {
        self.concurrency
    }

    pub fn extractor(&self) -> Option<&Extractor> {
        self.extractor.as_ref()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    fn from_cli(cli: Cli, resolver: &dyn NameResolver) -> Result<Self, ConfigError> {
        if !cli.operands.is_empty() {
            warn!("Ignoring operands: {}", cli.operands.join(" "));
        }

        let source_path = cli.file.unwrap_or_default();
        if source_path.is_empty() {
            return Err(ConfigError::EmptySourcePath);
        }

        let source_kind = match cli.file_type {
            None => SourceKind::default(),
            Some(text) => SourceKind::from_code(parse_leading_int(&text))
                .ok_or(ConfigError::InvalidSourceKind(text))?,
        };

        let concurrency = parse_concurrency(cli.concurrency.as_deref());
        let host_header = cli.host.filter(|host| !host.is_empty());

        let authority = split_url_prefix(cli.url.as_deref().unwrap_or_default())?;
        let port_choice = select_port(authority.port_text.as_deref());
        if let Some(warning) = &port_choice.warning {
            warn!("{}", warning);
        }
        let (port, port_text) = (port_choice.port, port_choice.text);
        let url_prefix = if port == DEFAULT_PORT {
            format!("{}{}", HTTP_SCHEME, authority.domain)
        } else {
            format!("{}{}:{}", HTTP_SCHEME, authority.domain, port)
        };

        let address = resolve_address(&authority.domain, port, resolver)?;
        debug!("{} resolved to {}", authority.domain, address);

        let replacement = cli.output_uri.unwrap_or_default();
        let extractor = compile_pattern(cli.regex.as_deref().unwrap_or_default())?
            .map(|regex| Extractor::new(regex, replacement.clone()));
        if extractor.is_some() && source_kind == SourceKind::AccessLog {
            // Documented as requiring '-t 0' but never rejected.
            warn!("-r is meant for '-t 0', applying it to an access log anyway");
        }
        if extractor.is_none() && !replacement.is_empty() {
            warn!("-o has no effect without -r");
        }

        Ok(RunConfig {
            source_path,
            source_kind,
            host_header,
            url_prefix,
            domain: authority.domain,
            port,
            port_text,
            address,
            concurrency,
            extractor,
            replacement,
        })
    }
}

/// Resolve process arguments (program name first) into an [`Invocation`].
pub fn resolve<I, T>(args: I) -> Result<Invocation, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    resolve_with(args, &SystemResolver)
}

/// Same as [`resolve`] with a caller supplied name resolver.
pub fn resolve_with<I, T>(args: I, resolver: &dyn NameResolver) -> Result<Invocation, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let raw: Vec<String> = args.into_iter().map(Into::into).collect();
    if raw.len() < 2 {
        return Ok(Invocation::Usage);
    }

    let normalized = args::normalize_args(raw);
    if normalized.help {
        return Ok(Invocation::Usage);
    }

    let cli = Cli::try_parse_from(normalized.argv).map_err(|err| {
        let rendered = err.to_string();
        let message = rendered.lines().next().unwrap_or_default();
        ConfigError::Arguments(message.trim_start_matches("error: ").to_string())
    })?;
    if cli.help {
        return Ok(Invocation::Usage);
    }

    RunConfig::from_cli(cli, resolver).map(Invocation::Run)
}

/// Read `-c` from its leading digits. Anything that is not a positive count
/// falls back to the default.
fn parse_concurrency(text: Option<&str>) -> NonZeroUsize {
    text.map(parse_leading_int)
        .and_then(|count| usize::try_from(count).ok())
        .and_then(NonZeroUsize::new)
        .unwrap_or(DEFAULT_CONCURRENCY)
}
