//! Upstream Module
//!
//! HTTP client for the DineOnCampus menu API. The upstream is treated as an
//! opaque JSON endpoint; payloads pass through without interpretation.

mod client;

pub use client::{MenuApiClient, UpstreamError};
