//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expired-entry sweep: removes entries past their midnight expiration

mod cleanup;

pub use cleanup::spawn_cleanup_task;
