//! API Module
//!
//! HTTP handlers and routing for the menu cache server.
//!
//! # Endpoints
//! - `GET /menu` - Menu lookup with dual-day prefetch
//! - `GET /menu/single` - Menu lookup for the requested day only
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
