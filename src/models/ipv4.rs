//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with subnet masks,
//! along with utility functions for subnet calculations.

use super::cidr::{parse_mask, split_cidr};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask bits for `len`, with `len` clamped to [`MAX_LENGTH`].
fn mask_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH.saturating_sub(len)))
        .unwrap_or(0)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Returns `None` when `len` is longer than [`MAX_LENGTH`].
///
/// # Examples
/// ```
/// use sockaddr_rfc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    (len <= MAX_LENGTH).then(|| mask_bits(len))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    get_cidr_mask(len).map(|mask| Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    get_cidr_mask(len).map(|mask| Ipv4Addr::from(u32::from(addr) | !mask))
}

/// IPv4 address with CIDR notation support.
///
/// The address keeps its host bits: `192.168.10.10/16` is stored as is and
/// [`Ipv4::network`] yields `192.168.0.0/16`. Ordering is by address, then
/// mask length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from text such as `"10.0.0.0/24"` or `"10.0.0.1"`.
    ///
    /// A missing mask means a host address (`/32`).
    pub fn new(addr_cidr: &str) -> Result<Ipv4, ParseError> {
        let (addr_part, mask_part) = split_cidr(addr_cidr);
        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| ParseError::InvalidIpv4(addr_cidr.to_string()))?;
        let mask = match mask_part {
            Some(mask) => parse_mask(addr_cidr, mask, MAX_LENGTH)?,
            None => MAX_LENGTH,
        };
        Ok(Ipv4 { addr, mask })
    }

    /// Build from an address and a prefix length.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, ParseError> {
        if mask > MAX_LENGTH {
            return Err(ParseError::InvalidMask {
                addr: addr.to_string(),
                mask: mask.to_string(),
                max: MAX_LENGTH,
            });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Host address (`/32`).
    pub fn host(addr: Ipv4Addr) -> Ipv4 {
        Ipv4 {
            addr,
            mask: MAX_LENGTH,
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Raw address value.
    pub fn to_u32(&self) -> u32 {
        u32::from(self.addr)
    }

    /// Subnet mask as u32, e.g. `0xFFFFFF00` for a `/24`.
    pub fn netmask(&self) -> u32 {
        mask_bits(self.mask)
    }

    /// Address in network byte order.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.addr.octets()
    }

    /// Host bits cleared, mask kept.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::from(self.to_u32() & self.netmask()),
            mask: self.mask,
        }
    }

    /// Host bits set, returned as a host address.
    pub fn broadcast(&self) -> Ipv4 {
        Ipv4::host(Ipv4Addr::from(self.to_u32() | !self.netmask()))
    }

    /// First address that is neither network nor broadcast.
    ///
    /// Blocks of two addresses or fewer (`/31`, `/32`) reserve nothing.
    pub fn first_usable(&self) -> Ipv4 {
        let network = self.to_u32() & self.netmask();
        if self.mask >= MAX_LENGTH - 1 {
            Ipv4::host(Ipv4Addr::from(network))
        } else {
            Ipv4::host(Ipv4Addr::from(network + 1))
        }
    }

    /// Last address that is neither network nor broadcast.
    pub fn last_usable(&self) -> Ipv4 {
        let broadcast = self.to_u32() | !self.netmask();
        if self.mask >= MAX_LENGTH - 1 {
            Ipv4::host(Ipv4Addr::from(broadcast))
        } else {
            Ipv4::host(Ipv4Addr::from(broadcast - 1))
        }
    }

    /// `other` masked with our mask lands on our network address.
    ///
    /// Only the masked value of `other` is compared, its own mask is ignored:
    /// `10.0.0.0/16` contains `10.0.0.0/8` although the `/8` is wider.
    pub fn contains(&self, other: &Ipv4) -> bool {
        other.to_u32() & self.netmask() == self.to_u32() & self.netmask()
    }

    /// Zero padded, 32 binary digits.
    pub fn bin_string(&self) -> String {
        format!("{:032b}", self.to_u32())
    }

    /// Zero padded, 8 lowercase hex digits.
    pub fn hex_string(&self) -> String {
        format!("{:08x}", self.to_u32())
    }
}

impl FromStr for Ipv4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.mask == MAX_LENGTH {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{}/{}", self.addr, self.mask)
        }
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}
