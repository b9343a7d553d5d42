//! Behaviour recommendation module.
//!
//! Selects the single highest-leverage behaviour change from a fixed action
//! catalog, given a user's recent emission breakdown and optionally their
//! household context.

mod catalog;
mod models;
mod routes;
mod selector;

pub use routes::router;
