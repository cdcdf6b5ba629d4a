//! JSON output of partition results.

use crate::models::IfAddr;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct PartitionReport<'a> {
    pub rfc: u32,
    pub matched: &'a [IfAddr],
    pub remainder: &'a [IfAddr],
}

/// Pretty printed JSON of a partition.
pub fn partition_json(
    rfc: u32,
    matched: &[IfAddr],
    remainder: &[IfAddr],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PartitionReport {
        rfc,
        matched,
        remainder,
    })
}
