//! Startup extension of the RFC table from configuration.
//!
//! The configuration value is a `;` separated list of entries shaped like
//! `6890#172.240.0.0/16,172.241.0.0/16`.

use super::RfcTable;
use crate::error::ConfigError;
use crate::models::{is_decimal, SockAddr, SockAddrs};
use std::collections::BTreeMap;

const ENTRY_SEPARATOR: char = ';';
const RFC_SEPARATOR: char = '#';
const RANGE_SEPARATOR: char = ',';

impl RfcTable {
    /// Append the ranges listed in `config` to the RFCs this table knows.
    ///
    /// `None` or an empty value returns the table unchanged. Entries for
    /// RFC numbers the table does not know are dropped. A bad entry shape
    /// or an unparsable range is a [`ConfigError`].
    pub fn extend(mut self, config: Option<&str>) -> Result<RfcTable, ConfigError> {
        let config = match config {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(self),
        };

        let extensions = read_extensions(config)?;
        let mut appended = 0;
        for (rfc, ranges) in extensions {
            let count = ranges.len();
            if self.append(rfc, ranges) {
                log::debug!("Extended RFC {rfc} with {count} range(s)");
                appended += count;
            } else {
                log::warn!("Ignoring extension for unknown RFC {rfc}");
            }
        }
        log::info!("RFC table extended with {appended} range(s)");
        Ok(self)
    }
}

/// Parse every entry of `config`.
///
/// When the same RFC appears twice the later entry replaces the earlier one.
pub fn read_extensions(config: &str) -> Result<BTreeMap<u32, SockAddrs>, ConfigError> {
    let mut result = BTreeMap::new();
    for entry in config.split(ENTRY_SEPARATOR) {
        if let Some((rfc, ranges)) = parse_entry(entry)? {
            result.insert(rfc, ranges);
        }
    }
    Ok(result)
}

/// `Ok(None)` for entries that are skipped: empty ones and those whose RFC
/// number is not an unsigned 32 bit integer.
fn parse_entry(entry: &str) -> Result<Option<(u32, SockAddrs)>, ConfigError> {
    if entry.is_empty() {
        return Ok(None);
    }

    let sections: Vec<&str> = entry.split(RFC_SEPARATOR).collect();
    let &[rfc, ranges] = sections.as_slice() else {
        return Err(ConfigError::MalformedEntry {
            entry: entry.to_string(),
        });
    };

    let rfc = match is_decimal(rfc).then(|| rfc.parse::<u32>()) {
        Some(Ok(rfc)) => rfc,
        _ => {
            log::warn!("Skipping RFC extension entry {entry:?}: {rfc:?} is not an RFC number");
            return Ok(None);
        }
    };

    let ranges = ranges
        .split(RANGE_SEPARATOR)
        .map(|range| {
            SockAddr::new(range).map_err(|source| ConfigError::InvalidRange {
                entry: entry.to_string(),
                range: range.to_string(),
                source,
            })
        })
        .collect::<Result<SockAddrs, _>>()?;

    Ok(Some((rfc, ranges)))
}
