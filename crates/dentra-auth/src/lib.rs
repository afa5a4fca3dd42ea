//! dentra-auth
//!
//! The auth gate: credential verification, the persisted session
//! marker, and the startup routing check that runs before any UI is
//! built.

pub mod credentials;
pub mod error;
pub mod gate;
pub mod marker;
pub mod provider;

pub use error::AuthError;
pub use gate::{AuthGate, StartupRoute, Surface};
