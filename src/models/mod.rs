//! Request and Response models for the menu cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query parameters and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{Day, LookupRequest, MenuQuery};
pub use responses::{HealthResponse, StatsResponse};
