//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expired-entry sweep: removes expired cache entries at configured
//!   intervals. The sweep is an optimization over lazy expiration and
//!   never evicts live entries.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
