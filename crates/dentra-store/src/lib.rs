//! dentra-store
//!
//! The in-memory record store: the authoritative collections for the
//! running client session, plus the async seam to the persistence
//! collaborator with an in-memory fallback path.

pub mod backend;
pub mod error;
pub mod ids;
pub mod store;
pub mod sync;

pub use error::StoreError;
pub use store::RecordStore;
