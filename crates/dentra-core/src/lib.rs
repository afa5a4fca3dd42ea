//! dentra-core
//!
//! Pure domain types, app configuration, and the demo dataset.
//! No async, no collaborators — this is the shared vocabulary of the
//! Dentra clinic system.

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
