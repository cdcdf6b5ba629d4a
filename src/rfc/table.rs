//! RFC classification table.

use super::known::KNOWN_RFCS;
use crate::models::{SockAddr, SockAddrs};
use std::collections::BTreeMap;

/// Mapping from RFC number to the ranges that RFC defines.
///
/// Built once, optionally extended with [`RfcTable::extend`], then only read.
/// A shared `&RfcTable` is all concurrent readers need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RfcTable {
    rfcs: BTreeMap<u32, SockAddrs>,
}

impl RfcTable {
    /// Empty table; nothing is ever classified.
    pub fn new() -> RfcTable {
        RfcTable::default()
    }

    /// The standards-defined ranges.
    pub fn known() -> RfcTable {
        KNOWN_RFCS
            .iter()
            .map(|(rfc, ranges)| {
                let ranges: SockAddrs = ranges
                    .iter()
                    .map(|r| {
                        SockAddr::new(r)
                            .unwrap_or_else(|e| panic!("Invalid built-in range for RFC {rfc}: {e}"))
                    })
                    .collect();
                (*rfc, ranges)
            })
            .collect()
    }

    /// Replace the ranges of `rfc`.
    pub fn insert(&mut self, rfc: u32, ranges: SockAddrs) -> Option<SockAddrs> {
        self.rfcs.insert(rfc, ranges)
    }

    /// Does any range of `rfc` contain `addr`? Unknown RFCs never match.
    pub fn is_rfc(&self, rfc: u32, addr: &SockAddr) -> bool {
        self.rfcs
            .get(&rfc)
            .is_some_and(|ranges| ranges.iter().any(|net| net.contains(addr)))
    }

    pub fn ranges(&self, rfc: u32) -> Option<&[SockAddr]> {
        self.rfcs.get(&rfc).map(Vec::as_slice)
    }

    pub fn contains_rfc(&self, rfc: u32) -> bool {
        self.rfcs.contains_key(&rfc)
    }

    /// RFC numbers in ascending order.
    pub fn rfcs(&self) -> impl Iterator<Item = u32> + '_ {
        self.rfcs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rfcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rfcs.is_empty()
    }

    pub(crate) fn append(&mut self, rfc: u32, ranges: SockAddrs) -> bool {
        match self.rfcs.get_mut(&rfc) {
            Some(existing) => {
                existing.extend(ranges);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(u32, SockAddrs)> for RfcTable {
    fn from_iter<I: IntoIterator<Item = (u32, SockAddrs)>>(iter: I) -> Self {
        RfcTable {
            rfcs: iter.into_iter().collect(),
        }
    }
}
