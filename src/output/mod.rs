//! Output formatting for partition results.
//!
//! This module handles formatting and outputting results for the binary:
//! - `terminal` - coloured terminal lines
//! - `json` - JSON report

mod json;
mod terminal;

pub use json::{partition_json, PartitionReport};
pub use terminal::{format_field, format_partition, format_rfc_header};
