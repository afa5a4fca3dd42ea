//! dentra-nav
//!
//! The navigation controller and its inputs: the role→section access
//! policy, the per-session view state, and the declarative section/tab
//! registry. The controller decides what is visible; rendering is the
//! embedder's problem.

pub mod controller;
pub mod error;
pub mod policy;
pub mod registry;
pub mod session;

pub use controller::{Activation, NavController, Navigation};
pub use error::NavError;
pub use policy::AccessPolicy;
pub use registry::{SectionRegistry, SectionSpec, TabSpec};
pub use session::SessionState;
