//! Service catalog search for autocomplete
//!
//! A static two-level taxonomy (category -> granular sub-services) with
//! case-insensitive substring search across both levels. The catalog is
//! loaded once and immutable for the process lifetime; lookups never fail,
//! unknown keys yield empty results.

mod data;
mod search;


pub use data::{ServiceCatalog, CATALOG};
pub use search::{ServiceMatch, MIN_QUERY_LENGTH};
