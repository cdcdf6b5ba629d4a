//! Occupancy partitioning of interface addresses.
//!
//! Splits interface addresses into those that sit inside a set of occupying
//! networks and the remainder.

use crate::models::{IfAddr, IfAddrs, SockAddr};

/// Partition `if_addrs` by the first occupying network that contains each one.
///
/// Networks are tried in the order given; the first hit wins, there is no
/// longest-prefix match. Both outputs keep input order. With no occupying
/// networks nothing is partitioned and both outputs are empty.
///
/// # Returns
/// A tuple of (matched, remainder)
pub fn if_by_occupy(if_addrs: &[IfAddr], occupy_nets: &[SockAddr]) -> (IfAddrs, IfAddrs) {
    let mut matched = IfAddrs::new();
    let mut remainder = IfAddrs::new();
    if occupy_nets.is_empty() {
        return (matched, remainder);
    }

    for if_addr in if_addrs {
        match occupy_nets
            .iter()
            .find(|net| net.contains(&if_addr.sock_addr))
        {
            Some(net) => {
                log::trace!("{if_addr} occupied by {net}");
                matched.push(if_addr.clone());
            }
            None => remainder.push(if_addr.clone()),
        }
    }
    (matched, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interface;

    fn if_addrs(inputs: &[&str]) -> IfAddrs {
        inputs
            .iter()
            .map(|s| IfAddr::from(SockAddr::new(s).unwrap()))
            .collect()
    }

    fn nets(inputs: &[&str]) -> Vec<SockAddr> {
        inputs.iter().map(|s| SockAddr::new(s).unwrap()).collect()
    }

    #[test]
    fn test_if_by_occupy() {
        let addrs = if_addrs(&["10.1.1.1", "192.168.1.1", "8.8.8.8"]);
        let (matched, remainder) =
            if_by_occupy(&addrs, &nets(&["10.0.0.0/8", "192.168.0.0/16"]));
        assert_eq!(matched, if_addrs(&["10.1.1.1", "192.168.1.1"]));
        assert_eq!(remainder, if_addrs(&["8.8.8.8"]));
    }

    #[test]
    fn test_if_by_occupy_no_networks() {
        let addrs = if_addrs(&["10.1.1.1", "192.168.1.1", "8.8.8.8", "::1"]);
        let (matched, remainder) = if_by_occupy(&addrs, &[]);
        assert!(matched.is_empty());
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_if_by_occupy_keeps_order() {
        let addrs = if_addrs(&["8.8.8.8", "10.0.0.2", "1.1.1.1", "10.0.0.1", "::1"]);
        let (matched, remainder) = if_by_occupy(&addrs, &nets(&["10.0.0.0/24"]));
        assert_eq!(matched, if_addrs(&["10.0.0.2", "10.0.0.1"]));
        assert_eq!(remainder, if_addrs(&["8.8.8.8", "1.1.1.1", "::1"]));
        assert_eq!(matched.len() + remainder.len(), addrs.len());
    }

    #[test]
    fn test_if_by_occupy_first_match_wins() {
        // overlapping networks still put each address in matched exactly once
        let addrs = if_addrs(&["10.1.2.3"]);
        let (matched, remainder) =
            if_by_occupy(&addrs, &nets(&["10.0.0.0/8", "10.1.0.0/16", "10.1.2.0/24"]));
        assert_eq!(matched.len(), 1);
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_if_by_occupy_mixed_variants() {
        let addrs = if_addrs(&["fd00::1", "10.0.0.1", "/run/app.sock"]);
        let (matched, remainder) = if_by_occupy(&addrs, &nets(&["fc00::/7", "/run/app.sock"]));
        assert_eq!(matched, if_addrs(&["fd00::1", "/run/app.sock"]));
        assert_eq!(remainder, if_addrs(&["10.0.0.1"]));
    }

    #[test]
    fn test_if_by_occupy_keeps_interface() {
        let eth0 = Interface {
            name: "eth0".to_string(),
            index: 2,
            mtu: 1500,
            hardware_addr: Some("00:11:22:33:44:55".to_string()),
            flags: 0x1003,
        };
        let addrs = vec![IfAddr::new(SockAddr::new("192.168.1.20/24").unwrap(), eth0.clone())];
        let (matched, _) = if_by_occupy(&addrs, &nets(&["192.168.0.0/16"]));
        assert_eq!(matched[0].interface, eth0);
    }
}
