//! Startup configuration.
//!
//! The only setting is the RFC table extension, read from the environment
//! key [`RFCS_EXTEND_ENV`]. See [`crate::rfc::RfcTable::extend`] for its
//! grammar.

use crate::error::ConfigError;
use crate::rfc::RfcTable;
use std::env;

/// Environment key holding the RFC table extension.
pub const RFCS_EXTEND_ENV: &str = "RFCS_EXTENDING_ENV";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Raw extension value, `None` when unset.
    pub rfc_extensions: Option<String>,
}

impl Config {
    /// Read [`RFCS_EXTEND_ENV`]. A value that is not unicode is an error,
    /// never an unset key.
    pub fn from_env() -> Result<Config, ConfigError> {
        let rfc_extensions = match env::var(RFCS_EXTEND_ENV) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEncoding {
                    key: RFCS_EXTEND_ENV.to_string(),
                })
            }
        };
        Ok(Config { rfc_extensions })
    }

    pub fn from_value(value: Option<&str>) -> Config {
        Config {
            rfc_extensions: value.map(str::to_string),
        }
    }

    /// Known RFC table extended with this configuration.
    pub fn build_table(&self) -> Result<RfcTable, ConfigError> {
        RfcTable::known().extend(self.rfc_extensions.as_deref())
    }
}
