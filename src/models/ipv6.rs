//! IPv6 address with CIDR notation support.

use super::cidr::{parse_mask, split_cidr};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

fn mask_bits(len: u8) -> u128 {
    u128::MAX
        .checked_shl(u32::from(MAX_LENGTH_V6.saturating_sub(len)))
        .unwrap_or(0)
}

/// IPv6 address with a prefix length. Same semantics as [`super::Ipv4`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    addr: Ipv6Addr,
    mask: u8,
}

impl Ipv6 {
    /// Parse `"2001:db8::/32"` or `"::1"`; no mask means `/128`.
    pub fn new(addr_cidr: &str) -> Result<Ipv6, ParseError> {
        let (addr_part, mask_part) = split_cidr(addr_cidr);
        let addr: Ipv6Addr = addr_part
            .parse()
            .map_err(|_| ParseError::InvalidIpv6(addr_cidr.to_string()))?;
        let mask = match mask_part {
            Some(mask) => parse_mask(addr_cidr, mask, MAX_LENGTH_V6)?,
            None => MAX_LENGTH_V6,
        };
        Ok(Ipv6 { addr, mask })
    }

    pub fn from_parts(addr: Ipv6Addr, mask: u8) -> Result<Ipv6, ParseError> {
        if mask > MAX_LENGTH_V6 {
            return Err(ParseError::InvalidMask {
                addr: addr.to_string(),
                mask: mask.to_string(),
                max: MAX_LENGTH_V6,
            });
        }
        Ok(Ipv6 { addr, mask })
    }

    pub fn host(addr: Ipv6Addr) -> Ipv6 {
        Ipv6 {
            addr,
            mask: MAX_LENGTH_V6,
        }
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn to_u128(&self) -> u128 {
        u128::from(self.addr)
    }

    pub fn netmask(&self) -> u128 {
        mask_bits(self.mask)
    }

    pub fn to_bytes(&self) -> [u8; 16] {
        self.addr.octets()
    }

    pub fn network(&self) -> Ipv6 {
        Ipv6 {
            addr: Ipv6Addr::from(self.to_u128() & self.netmask()),
            mask: self.mask,
        }
    }

    pub fn broadcast(&self) -> Ipv6 {
        Ipv6::host(Ipv6Addr::from(self.to_u128() | !self.netmask()))
    }

    /// `/127` and `/128` reserve nothing.
    pub fn first_usable(&self) -> Ipv6 {
        let network = self.to_u128() & self.netmask();
        if self.mask >= MAX_LENGTH_V6 - 1 {
            Ipv6::host(Ipv6Addr::from(network))
        } else {
            Ipv6::host(Ipv6Addr::from(network + 1))
        }
    }

    pub fn last_usable(&self) -> Ipv6 {
        let broadcast = self.to_u128() | !self.netmask();
        if self.mask >= MAX_LENGTH_V6 - 1 {
            Ipv6::host(Ipv6Addr::from(broadcast))
        } else {
            Ipv6::host(Ipv6Addr::from(broadcast - 1))
        }
    }

    /// Same rule as [`Ipv4::contains`](super::Ipv4::contains): the mask of
    /// `other` plays no part.
    pub fn contains(&self, other: &Ipv6) -> bool {
        other.to_u128() & self.netmask() == self.to_u128() & self.netmask()
    }

    /// Zero padded, 128 binary digits.
    pub fn bin_string(&self) -> String {
        format!("{:0128b}", self.to_u128())
    }

    /// Zero padded, 32 lowercase hex digits.
    pub fn hex_string(&self) -> String {
        format!("{:032x}", self.to_u128())
    }
}

impl FromStr for Ipv6 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6::new(s)
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.mask == MAX_LENGTH_V6 {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{}/{}", self.addr, self.mask)
        }
    }
}

impl Serialize for Ipv6 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv6 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv6_new() {
        let ip = Ipv6::new("2001:db8::1/32").unwrap();
        assert_eq!(ip.mask(), 32);
        assert_eq!(ip.network().to_string(), "2001:db8::/32");
        assert_eq!(ip.broadcast().to_string(), "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(ip.first_usable().to_string(), "2001:db8::1");
        assert_eq!(ip.last_usable().to_string(), "2001:db8:ffff:ffff:ffff:ffff:ffff:fffe");

        let host = Ipv6::new("::1").unwrap();
        assert_eq!(host.mask(), 128);
        assert_eq!(host.network(), host);
        assert_eq!(host.broadcast(), host);
    }

    #[test]
    fn test_ipv6_bad_input() {
        assert!(matches!(
            Ipv6::new("::1/129"),
            Err(ParseError::InvalidMask { max: 128, .. })
        ));
        assert!(matches!(Ipv6::new("2001:::1"), Err(ParseError::InvalidIpv6(_))));
        assert!(Ipv6::new("fe80::/").is_err());
    }

    #[test]
    fn test_ipv6_usable_degenerate() {
        let p127 = Ipv6::new("2001:db8::/127").unwrap();
        assert_eq!(p127.first_usable().addr(), p127.network().addr());
        assert_eq!(p127.last_usable().addr(), p127.broadcast().addr());
        assert_eq!(p127.last_usable().to_string(), "2001:db8::1");

        let p126 = Ipv6::new("2001:db8::/126").unwrap();
        assert_eq!(p126.first_usable().to_string(), "2001:db8::1");
        assert_eq!(p126.last_usable().to_string(), "2001:db8::2");

        let all = Ipv6::new("::/0").unwrap();
        assert_eq!(all.first_usable().to_string(), "::1");
        assert_eq!(all.broadcast().to_u128(), u128::MAX);
    }

    #[test]
    fn test_ipv6_contains() {
        let ula = Ipv6::new("fc00::/7").unwrap();
        assert!(ula.contains(&Ipv6::new("fd12:3456::1").unwrap()));
        assert!(!ula.contains(&Ipv6::new("fe80::1").unwrap()));
        assert!(ula.network().contains(&ula.broadcast()));
    }

    #[test]
    fn test_ipv6_strings() {
        let ip = Ipv6::new("::1").unwrap();
        assert_eq!(ip.hex_string(), format!("{}1", "0".repeat(31)));
        assert_eq!(ip.bin_string().len(), 128);
        assert!(ip.bin_string().ends_with("01"));
        assert_eq!(ip.to_bytes()[15], 1);
    }

    #[test]
    fn test_ipv6_round_trip() {
        for input in ["::", "::1", "2001:db8::/32", "fe80::1/64", "::ffff:0:0/96"] {
            let ip = Ipv6::new(input).unwrap();
            assert_eq!(ip.to_string().parse::<Ipv6>().unwrap(), ip, "{input}");
        }
    }
}
