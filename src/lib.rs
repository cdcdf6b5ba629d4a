//! Socket address classification.
//!
//! - [`models`] - IPv4, IPv6 and UNIX socket addresses with CIDR arithmetic
//! - [`rfc`] - RFC range table, its startup extension and lookups
//! - [`processing`] - partitioning of interface addresses
//! - [`config`] - environment driven startup configuration
//! - [`output`] - formatting used by the binary

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod rfc;

pub use error::{ConfigError, ParseError};
pub use models::{IfAddr, IfAddrs, Interface, SockAddr, SockAddrType, SockAddrs};
pub use processing::{if_by_occupy, if_by_rfc, if_by_type};
pub use rfc::RfcTable;

/// Build the RFC table for this process: known ranges plus the extension
/// found in the environment.
pub fn rfc_table_from_env() -> Result<RfcTable, ConfigError> {
    config::Config::from_env()?.build_table()
}

/// Parse addresses as interface addresses without interface metadata.
pub fn parse_if_addrs<S: AsRef<str>>(inputs: &[S]) -> Result<IfAddrs, ParseError> {
    inputs
        .iter()
        .map(|s| SockAddr::new(s.as_ref()).map(IfAddr::from))
        .collect()
}
