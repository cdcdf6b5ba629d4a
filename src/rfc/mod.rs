//! RFC range classification.
//!
//! - `known` - built-in ranges per RFC number
//! - `table` - the [`RfcTable`] lookup structure
//! - `extension` - one-shot extension from configuration
//! - [`global`] - optional install-once process-wide table

mod extension;
pub mod global;
mod known;
mod table;

pub use extension::read_extensions;
pub use known::FORWARDING_BLACKLIST;
pub use table::RfcTable;
