use std::cell::RefCell;
use std::str::FromStr;

use dentra_core::models::Role;

/// The single persisted session value: either a valid role id or the
/// explicit logged-out sentinel. Scoped to the browser-session
/// lifetime by whatever backs [`MarkerStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMarker {
    LoggedOut,
    Role(Role),
}

impl SessionMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMarker::LoggedOut => "loggedOut",
            SessionMarker::Role(role) => role.as_str(),
        }
    }

    /// Parses a stored value. `None` for anything unrecognized — a
    /// corrupt marker is treated as absent, never as an error.
    pub fn parse(value: &str) -> Option<Self> {
        match Role::from_str(value) {
            Ok(Role::LoggedOut) => Some(SessionMarker::LoggedOut),
            Ok(role) => Some(SessionMarker::Role(role)),
            Err(_) => None,
        }
    }
}

/// Abstraction over session-scoped key storage (browser
/// sessionStorage, or an in-memory map for tests and native hosts).
pub trait MarkerStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
    fn clear(&self);
}

/// Marker store backed by process memory. Single-threaded by design,
/// like the browser storage it stands in for.
#[derive(Debug, Default)]
pub struct InMemoryMarkerStore {
    value: RefCell<Option<String>>,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerStore for InMemoryMarkerStore {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}
