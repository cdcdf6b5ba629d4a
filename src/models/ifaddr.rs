//! Interface address records handed in by an interface enumerator.

use super::SockAddr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface metadata. Opaque to classification; carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Interface {
    /// Interface name, e.g. `eth0`.
    pub name: String,
    /// Kernel interface index.
    pub index: u32,
    #[serde(default)]
    pub mtu: u32,
    /// Link layer address, if any.
    #[serde(default)]
    pub hardware_addr: Option<String>,
    /// Raw interface flags as reported by the OS.
    #[serde(default)]
    pub flags: u32,
}

/// An address bound to an interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfAddr {
    pub sock_addr: SockAddr,
    pub interface: Interface,
}

pub type IfAddrs = Vec<IfAddr>;

impl IfAddr {
    pub fn new(sock_addr: SockAddr, interface: Interface) -> IfAddr {
        IfAddr {
            sock_addr,
            interface,
        }
    }
}

impl From<SockAddr> for IfAddr {
    fn from(sock_addr: SockAddr) -> Self {
        IfAddr::new(sock_addr, Interface::default())
    }
}

impl fmt::Display for IfAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.interface.name.is_empty() {
            write!(f, "{}", self.sock_addr)
        } else {
            write!(f, "{} ({})", self.sock_addr, self.interface.name)
        }
    }
}
