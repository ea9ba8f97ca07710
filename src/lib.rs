//! Object Cache - A lightweight in-memory object cache server
//!
//! Stores arbitrary JSON objects with TTL expiration and policy-based
//! eviction (oldest-first, newest-first or reject-on-full).

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
