//! UNIX domain socket address.

use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A filesystem path naming a local socket.
///
/// There is no mask; containment is exact path equality.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct UnixSock {
    path: String,
}

impl UnixSock {
    /// Any non-empty path is accepted; no filesystem access is made.
    pub fn new(path: &str) -> Result<UnixSock, ParseError> {
        if path.is_empty() {
            return Err(ParseError::InvalidUnixSock(path.to_string()));
        }
        Ok(UnixSock {
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contains(&self, other: &UnixSock) -> bool {
        self.path == other.path
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.path.as_bytes().to_vec()
    }
}

impl FromStr for UnixSock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnixSock::new(s)
    }
}

impl std::fmt::Display for UnixSock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

impl Serialize for UnixSock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for UnixSock {
    fn deserialize<D>(deserializer: D) -> Result<UnixSock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UnixSock::new(&s).map_err(de::Error::custom)
    }
}
