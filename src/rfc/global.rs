//! Process-wide RFC table.
//!
//! Install the extended table once at startup, before any reader runs.
//! Readers that arrive first get [`RfcTable::known`] and freeze it: every
//! later [`install`] fails. Passing an `&RfcTable` around is preferred where
//! the caller can.

use super::RfcTable;
use crate::error::ConfigError;
use crate::models::SockAddr;
use std::sync::OnceLock;

static TABLE: OnceLock<RfcTable> = OnceLock::new();

/// Freeze `table` as the process-wide table.
pub fn install(table: RfcTable) -> Result<&'static RfcTable, ConfigError> {
    TABLE
        .set(table)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    Ok(global_table())
}

pub fn global_table() -> &'static RfcTable {
    TABLE.get_or_init(RfcTable::known)
}

/// [`RfcTable::is_rfc`] against the process-wide table.
pub fn is_rfc(rfc: u32, addr: &SockAddr) -> bool {
    global_table().is_rfc(rfc, addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_freezes_table() {
        assert!(is_rfc(1918, &SockAddr::new("192.168.1.1").unwrap()));
        assert_eq!(install(RfcTable::new()), Err(ConfigError::AlreadyInstalled));
        assert_eq!(global_table(), &RfcTable::known());
    }
}
