//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::{IfAddr, SockAddr};
use colored::Colorize;
use itertools::Itertools;

/// Left-align `value` in a column of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:<width$}", value.to_string())
}

/// One line naming the RFC and its ranges.
pub fn format_rfc_header(rfc: u32, ranges: Option<&[SockAddr]>) -> String {
    match ranges {
        Some(ranges) => format!(
            "RFC {} [{}]",
            rfc.to_string().bold(),
            ranges.iter().join(", ")
        ),
        None => format!("RFC {} {}", rfc.to_string().bold(), "(unknown)".yellow()),
    }
}

/// Matched addresses in green, the remainder in red, input order kept.
pub fn format_partition(matched: &[IfAddr], remainder: &[IfAddr]) -> String {
    let width = matched
        .iter()
        .chain(remainder)
        .map(|a| a.to_string().len())
        .max()
        .unwrap_or(0);
    let matched = matched
        .iter()
        .map(|a| format!("  {} {}", format_field(a, width), "match".green()));
    let remainder = remainder
        .iter()
        .map(|a| format!("  {} {}", format_field(a, width), "no match".red()));
    matched.chain(remainder).join("\n")
}
