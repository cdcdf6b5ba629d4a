//! Error types for address parsing and RFC table configuration.

use thiserror::Error;

/// Recoverable failure while turning text into an address.
///
/// Every variant carries the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid IPv4 address: {0:?}")]
    InvalidIpv4(String),
    #[error("invalid IPv6 address: {0:?}")]
    InvalidIpv6(String),
    #[error("invalid mask length {mask:?} for {addr:?} (max {max})")]
    InvalidMask { addr: String, mask: String, max: u8 },
    #[error("invalid UNIX socket path: {0:?}")]
    InvalidUnixSock(String),
    #[error("unable to convert {0:?} to an IPv4 or IPv6 address, or a UNIX socket")]
    Unrecognized(String),
}

/// Fatal startup failure while building the RFC classification table.
///
/// Library code returns these; the binary turns them into a non-zero exit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid RFC extension entry {entry:?}, should be 'number#ip_range[,ip_range...]'")]
    MalformedEntry { entry: String },
    #[error("invalid range {range:?} in RFC extension entry {entry:?}: {source}")]
    InvalidRange {
        entry: String,
        range: String,
        #[source]
        source: ParseError,
    },
    #[error("{key} is not valid unicode")]
    InvalidEncoding { key: String },
    #[error("RFC table already installed, extension is only allowed once at startup")]
    AlreadyInstalled,
}
