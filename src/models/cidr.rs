//! Shared pieces of `address[/mask]` parsing.

use crate::error::ParseError;

/// Split `"addr/mask"` at the first `/`.
pub(crate) fn split_cidr(input: &str) -> (&str, Option<&str>) {
    match input.split_once('/') {
        Some((addr, mask)) => (addr, Some(mask)),
        None => (input, None),
    }
}

/// Strict unsigned decimal: digits only, no sign, no whitespace.
pub(crate) fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a prefix length no longer than `max`.
pub(crate) fn parse_mask(input: &str, mask: &str, max: u8) -> Result<u8, ParseError> {
    let invalid = || ParseError::InvalidMask {
        addr: input.to_string(),
        mask: mask.to_string(),
        max,
    };
    if !is_decimal(mask) {
        return Err(invalid());
    }
    match mask.parse::<u8>() {
        Ok(len) if len <= max => Ok(len),
        _ => Err(invalid()),
    }
}
