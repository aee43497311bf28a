//! Cache Module
//!
//! Provides cache-key derivation, midnight-aligned TTL computation, and an
//! in-memory key-value store with per-entry expiration.

mod entry;
mod key;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use key::derive_key;
pub use stats::CacheStats;
pub use store::MenuStore;
pub use ttl::{seconds_until_end_of_day, ttl_until_local_midnight};
