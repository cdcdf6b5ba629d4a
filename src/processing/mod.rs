//! Interface address partitioning.
//!
//! - `occupy` - split by a caller-supplied list of occupying networks
//! - `filter` - split by RFC membership or address type

mod filter;
mod occupy;

// Re-export public functions
pub use filter::{if_by_rfc, if_by_type};
pub use occupy::if_by_occupy;
