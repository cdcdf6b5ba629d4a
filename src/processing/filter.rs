//! Interface address filters built on the RFC table.

use crate::models::{IfAddr, IfAddrs, SockAddrType};
use crate::rfc::RfcTable;

/// Split `if_addrs` by membership in `rfc`'s ranges.
///
/// Unlike [`super::if_by_occupy`] an unknown RFC is not special: nothing
/// matches and every address lands in the remainder.
///
/// # Returns
/// A tuple of (matched, remainder)
pub fn if_by_rfc(table: &RfcTable, rfc: u32, if_addrs: &[IfAddr]) -> (IfAddrs, IfAddrs) {
    if !table.contains_rfc(rfc) {
        log::debug!("RFC {rfc} is not in the table, nothing matches");
    }
    if_addrs
        .iter()
        .cloned()
        .partition(|if_addr| table.is_rfc(rfc, &if_addr.sock_addr))
}

/// Split `if_addrs` by address variant.
pub fn if_by_type(sock_type: SockAddrType, if_addrs: &[IfAddr]) -> (IfAddrs, IfAddrs) {
    if_addrs
        .iter()
        .cloned()
        .partition(|if_addr| if_addr.sock_addr.sock_type() == sock_type)
}
