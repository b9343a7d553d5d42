//! Weather proxy module.
//!
//! Thin pass-through to the weather provider so the dashboard never holds
//! the provider API key.

mod models;
mod routes;

pub use routes::router;
