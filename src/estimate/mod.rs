//! Carbon emission estimation module.
//!
//! Converts an activity record into a CO2-equivalent mass, preferring the
//! authoritative emission-factor provider and degrading to a fixed local
//! coefficient table when the provider is unreachable.

mod calculator;
mod models;
mod routes;

pub use models::{ActivityType, Confidence};
pub use routes::router;
