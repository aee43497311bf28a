//! Menu Cache - A read-through caching proxy for the DineOnCampus menu API
//!
//! Answers location/date/period menu lookups from an in-memory cache,
//! fetching from the upstream API on miss and expiring entries at local midnight.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use service::MenuCacheService;
pub use tasks::spawn_cleanup_task;
