use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, ToSocketAddrs};

use log::debug;

use crate::error::ConfigError;

/// Name lookup used when the domain is not a literal address
pub trait NameResolver {
    fn lookup(&self, domain: &str, port: u16) -> io::Result<Vec<SocketAddr>>;
}

/// Blocking lookup through the system resolver
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl NameResolver for SystemResolver {
    fn lookup(&self, domain: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
        Ok((domain, port).to_socket_addrs()?.collect())
    }
}

/// Turn a domain into an IPv4 socket address.
///
/// Dotted-decimal literals are used as is and never reach `resolver`.
pub fn resolve_address(
    domain: &str,
    port: u16,
    resolver: &dyn NameResolver,
) -> Result<SocketAddrV4, ConfigError> {
    if let Ok(ip) = domain.parse::<Ipv4Addr>() {
        return Ok(SocketAddrV4::new(ip, port));
    }

    debug!("Resolving {}", domain);
    let candidates = resolver
        .lookup(domain, port)
        .map_err(|source| ConfigError::UnresolvableDomain {
            domain: domain.to_string(),
            source,
        })?;

    candidates
        .into_iter()
        .find_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(SocketAddrV4::new(*v4.ip(), port)),
            SocketAddr::V6(_) => None,
        })
        .ok_or_else(|| ConfigError::UnresolvableDomain {
            domain: domain.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no IPv4 address found"),
        })
}
