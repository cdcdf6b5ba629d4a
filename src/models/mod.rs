//! Address value types.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] / [`Ipv6`] - IP addresses with CIDR notation support
//! - [`UnixSock`] - local socket paths
//! - [`SockAddr`] - the closed union of the above
//! - [`IfAddr`] - an address paired with interface metadata

mod cidr;
mod ifaddr;
mod ipv4;
mod ipv6;
mod sockaddr;
mod unix;

// Re-export public types
pub use ifaddr::{IfAddr, IfAddrs, Interface};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use ipv6::{Ipv6, MAX_LENGTH_V6};
pub use sockaddr::{SockAddr, SockAddrType, SockAddrs};
pub use unix::UnixSock;

pub(crate) use cidr::is_decimal;
