//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /object/:key` - Retrieve a stored value
//! - `POST /object/:key` - Store a value (identical to PUT)
//! - `PUT /object/:key` - Store a value (identical to POST)
//! - `DELETE /object/:key` - Delete a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
