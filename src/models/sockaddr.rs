//! The unified address type.
//!
//! [`SockAddr`] is a closed sum over [`Ipv4`], [`Ipv6`] and [`UnixSock`].
//! Comparisons across variants are always negative: an IPv4 network never
//! contains an IPv6 address and two different variants are never equal.

use super::{Ipv4, Ipv6, UnixSock};
use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered collection of addresses. Order is kept by every operation.
pub type SockAddrs = Vec<SockAddr>;

/// Variant tag of a [`SockAddr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SockAddrType {
    IPv4,
    IPv6,
    Unix,
}

impl fmt::Display for SockAddrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SockAddrType::IPv4 => "IPv4",
            SockAddrType::IPv6 => "IPv6",
            SockAddrType::Unix => "UNIX",
        };
        f.write_str(name)
    }
}

#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub enum SockAddr {
    Ipv4(Ipv4),
    Ipv6(Ipv6),
    Unix(UnixSock),
}

lazy_static! {
    // Dotted digits, or bare digits with a numeric mask: anything shaped like
    // this is an IPv4 attempt, so "0.0.0.0.0" is a parse error and not a
    // relative path. "10/app.sock" has no dot and stays a path.
    static ref IPV4_LIKE: Regex =
        Regex::new(r"^(?:[0-9]+(\.[0-9]+)+(/.*)?|[0-9]+(/[0-9]+)?)$").expect("Invalid Regex?");
    static ref IPV6_LIKE: Regex =
        Regex::new(r"^[0-9A-Fa-f.]*:[0-9A-Fa-f:.]*(/.*)?$").expect("Invalid Regex?");
}

fn is_unix_like(input: &str) -> bool {
    input.len() > 1 && (input.starts_with('/') || input.starts_with('.') || input.contains('/'))
}

impl SockAddr {
    /// Parse IPv4, IPv6 (either with optional `/bits`) or a UNIX socket path.
    ///
    /// Dotted digits are always read as IPv4, whatever follows the `/`, so
    /// `10.0.0.0/33` is a mask error. A relative path led by bare digits,
    /// like `10/app.sock`, is a UNIX socket.
    ///
    /// # Examples
    /// ```
    /// use sockaddr_rfc::models::{SockAddr, SockAddrType};
    /// let sa = SockAddr::new("10.0.0.0/8").unwrap();
    /// assert_eq!(sa.sock_type(), SockAddrType::IPv4);
    /// assert!(SockAddr::new("256.0.0.0").is_err());
    /// ```
    pub fn new(input: &str) -> Result<SockAddr, ParseError> {
        if IPV4_LIKE.is_match(input) {
            Ipv4::new(input).map(SockAddr::Ipv4)
        } else if IPV6_LIKE.is_match(input) {
            Ipv6::new(input).map(SockAddr::Ipv6)
        } else if is_unix_like(input) {
            UnixSock::new(input).map(SockAddr::Unix)
        } else {
            Err(ParseError::Unrecognized(input.to_string()))
        }
    }

    pub fn sock_type(&self) -> SockAddrType {
        match self {
            SockAddr::Ipv4(_) => SockAddrType::IPv4,
            SockAddr::Ipv6(_) => SockAddrType::IPv6,
            SockAddr::Unix(_) => SockAddrType::Unix,
        }
    }

    /// Network byte order for IP addresses, path bytes for sockets.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            SockAddr::Ipv4(ip) => ip.to_bytes().to_vec(),
            SockAddr::Ipv6(ip) => ip.to_bytes().to_vec(),
            SockAddr::Unix(sock) => sock.to_bytes(),
        }
    }

    /// Prefix length; `None` for UNIX sockets.
    pub fn mask(&self) -> Option<u8> {
        match self {
            SockAddr::Ipv4(ip) => Some(ip.mask()),
            SockAddr::Ipv6(ip) => Some(ip.mask()),
            SockAddr::Unix(_) => None,
        }
    }

    /// True only within the same variant, see [`Ipv4::contains`].
    pub fn contains(&self, other: &SockAddr) -> bool {
        match (self, other) {
            (SockAddr::Ipv4(net), SockAddr::Ipv4(ip)) => net.contains(ip),
            (SockAddr::Ipv6(net), SockAddr::Ipv6(ip)) => net.contains(ip),
            (SockAddr::Unix(a), SockAddr::Unix(b)) => a.contains(b),
            _ => false,
        }
    }

    pub fn network(&self) -> Option<SockAddr> {
        match self {
            SockAddr::Ipv4(ip) => Some(SockAddr::Ipv4(ip.network())),
            SockAddr::Ipv6(ip) => Some(SockAddr::Ipv6(ip.network())),
            SockAddr::Unix(_) => None,
        }
    }

    pub fn broadcast(&self) -> Option<SockAddr> {
        match self {
            SockAddr::Ipv4(ip) => Some(SockAddr::Ipv4(ip.broadcast())),
            SockAddr::Ipv6(ip) => Some(SockAddr::Ipv6(ip.broadcast())),
            SockAddr::Unix(_) => None,
        }
    }

    pub fn first_usable(&self) -> Option<SockAddr> {
        match self {
            SockAddr::Ipv4(ip) => Some(SockAddr::Ipv4(ip.first_usable())),
            SockAddr::Ipv6(ip) => Some(SockAddr::Ipv6(ip.first_usable())),
            SockAddr::Unix(_) => None,
        }
    }

    pub fn last_usable(&self) -> Option<SockAddr> {
        match self {
            SockAddr::Ipv4(ip) => Some(SockAddr::Ipv4(ip.last_usable())),
            SockAddr::Ipv6(ip) => Some(SockAddr::Ipv6(ip.last_usable())),
            SockAddr::Unix(_) => None,
        }
    }

    pub fn bin_string(&self) -> Option<String> {
        match self {
            SockAddr::Ipv4(ip) => Some(ip.bin_string()),
            SockAddr::Ipv6(ip) => Some(ip.bin_string()),
            SockAddr::Unix(_) => None,
        }
    }

    pub fn hex_string(&self) -> Option<String> {
        match self {
            SockAddr::Ipv4(ip) => Some(ip.hex_string()),
            SockAddr::Ipv6(ip) => Some(ip.hex_string()),
            SockAddr::Unix(_) => None,
        }
    }

    pub fn as_ipv4(&self) -> Option<&Ipv4> {
        match self {
            SockAddr::Ipv4(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn as_ipv6(&self) -> Option<&Ipv6> {
        match self {
            SockAddr::Ipv6(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn as_unix(&self) -> Option<&UnixSock> {
        match self {
            SockAddr::Unix(sock) => Some(sock),
            _ => None,
        }
    }
}

impl From<Ipv4> for SockAddr {
    fn from(ip: Ipv4) -> Self {
        SockAddr::Ipv4(ip)
    }
}

impl From<Ipv6> for SockAddr {
    fn from(ip: Ipv6) -> Self {
        SockAddr::Ipv6(ip)
    }
}

impl From<UnixSock> for SockAddr {
    fn from(sock: UnixSock) -> Self {
        SockAddr::Unix(sock)
    }
}

impl FromStr for SockAddr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SockAddr::new(s)
    }
}

impl fmt::Display for SockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SockAddr::Ipv4(ip) => fmt::Display::fmt(ip, f),
            SockAddr::Ipv6(ip) => fmt::Display::fmt(ip, f),
            SockAddr::Unix(sock) => fmt::Display::fmt(sock, f),
        }
    }
}

impl Serialize for SockAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SockAddr {
    fn deserialize<D>(deserializer: D) -> Result<SockAddr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SockAddr::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sa(input: &str) -> SockAddr {
        SockAddr::new(input).unwrap_or_else(|e| panic!("Failed parse {input}: {e}"))
    }

    #[test]
    fn test_sockaddr_types() {
        assert_eq!(sa("0.0.0.0").sock_type(), SockAddrType::IPv4);
        assert_eq!(sa("192.168.10.10/16").sock_type(), SockAddrType::IPv4);
        assert_eq!(sa("::1").sock_type(), SockAddrType::IPv6);
        assert_eq!(sa("2001:db8::/32").sock_type(), SockAddrType::IPv6);
        assert_eq!(sa("::ffff:192.0.2.1").sock_type(), SockAddrType::IPv6);
        assert_eq!(sa("/tmp/app.sock").sock_type(), SockAddrType::Unix);
        assert_eq!(sa("./app.sock").sock_type(), SockAddrType::Unix);
        assert_eq!(sa("run/app.sock").sock_type(), SockAddrType::Unix);
        assert_eq!(sa("10/app.sock").sock_type(), SockAddrType::Unix);
        assert_eq!(sa("10/app.sock").as_unix().map(UnixSock::path), Some("10/app.sock"));
    }

    #[test]
    fn test_sockaddr_dotted_digits_stay_ipv4() {
        assert!(matches!(
            SockAddr::new("10.0.0.0/app.sock"),
            Err(ParseError::InvalidMask { .. })
        ));
        assert!(matches!(SockAddr::new("10/33"), Err(ParseError::InvalidIpv4(_))));
        assert!(matches!(SockAddr::new("10"), Err(ParseError::InvalidIpv4(_))));
    }

    #[test]
    fn test_sockaddr_bad_input() {
        for bad in ["256.0.0.0", "0.0.0.0.0", "10.0.0.0/33", "::1/129", "", "/", "hostname"] {
            assert!(SockAddr::new(bad).is_err(), "{bad:?} should fail");
        }
        assert_eq!(
            SockAddr::new("0.0.0.0.0"),
            Err(ParseError::InvalidIpv4("0.0.0.0.0".to_string()))
        );
        assert_eq!(
            SockAddr::new("hostname"),
            Err(ParseError::Unrecognized("hostname".to_string()))
        );
    }

    #[test]
    fn test_sockaddr_matches_typed_constructor() {
        let v4 = Ipv4::new("192.168.1.10/24").unwrap();
        assert_eq!(sa("192.168.1.10/24"), SockAddr::from(v4));
        assert_eq!(sa("192.168.1.10/24").as_ipv4(), Some(&v4));
        assert!(sa("192.168.1.10/24").as_ipv6().is_none());
    }

    #[test]
    fn test_sockaddr_cross_variant() {
        let any_v4 = sa("0.0.0.0/0");
        let any_v6 = sa("::/0");
        let mapped = sa("::ffff:10.0.0.1");
        assert!(!any_v4.contains(&mapped));
        assert!(any_v6.contains(&mapped));
        assert!(!any_v6.contains(&sa("10.0.0.1")));
        assert_ne!(sa("/tmp/x"), sa("0.0.0.0"));
        assert!(!sa("/tmp/x").contains(&sa("0.0.0.0")));
        assert!(sa("/tmp/x").contains(&sa("/tmp/x")));
    }

    #[test]
    fn test_sockaddr_equality_properties() {
        let a = sa("10.1.2.3/8");
        let b = sa("10.1.2.3/8");
        let c = SockAddr::from(Ipv4::new("10.1.2.3/8").unwrap());
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_ne!(a, sa("10.1.2.3/9"));
        assert_ne!(a, sa("10.0.0.0/8"));
    }

    #[test]
    fn test_sockaddr_ordering() {
        let mut addrs = vec![sa("/tmp/b"), sa("::1"), sa("10.0.0.1/8"), sa("10.0.0.1"), sa("1.1.1.1")];
        addrs.sort();
        let sorted: Vec<String> = addrs.iter().map(|a| a.to_string()).collect();
        assert_eq!(sorted, vec!["1.1.1.1", "10.0.0.1/8", "10.0.0.1", "::1", "/tmp/b"]);
    }

    #[test]
    fn test_sockaddr_round_trip() {
        for input in ["0.0.0.0", "0.0.0.1/1", "240.0.0.0/4", "fe80::/10", "::", "/var/run/s.sock"] {
            let addr = sa(input);
            assert_eq!(sa(&addr.to_string()), addr, "round trip of {input}");
        }
    }

    #[test]
    fn test_sockaddr_derived() {
        let addr = sa("192.168.10.10/16");
        assert_eq!(addr.network(), Some(sa("192.168.0.0/16")));
        assert_eq!(addr.broadcast(), Some(sa("192.168.255.255")));
        assert_eq!(addr.first_usable(), Some(sa("192.168.0.1")));
        assert_eq!(addr.last_usable(), Some(sa("192.168.255.254")));
        assert_eq!(addr.hex_string().as_deref(), Some("c0a80a0a"));
        assert_eq!(addr.to_bytes(), vec![192, 168, 10, 10]);
        assert_eq!(addr.mask(), Some(16));

        let sock = sa("/tmp/x");
        assert!(sock.network().is_none());
        assert!(sock.bin_string().is_none());
        assert!(sock.mask().is_none());
    }

    #[test]
    fn test_sockaddr_serde() {
        let addrs: SockAddrs = vec![sa("10.0.0.0/8"), sa("fc00::/7"), sa("/tmp/x")];
        let json = serde_json::to_string(&addrs).unwrap();
        assert_eq!(json, r#"["10.0.0.0/8","fc00::/7","/tmp/x"]"#);
        let back: SockAddrs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addrs);
    }
}
