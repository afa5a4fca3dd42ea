use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Authorization level of the current session.
///
/// The string forms are the wire format used by the persisted session
/// marker and the access-policy table, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Role {
    Admin,
    Receptionist,
    Dentist,
    LoggedOut,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Receptionist => "receptionist",
            Role::Dentist => "dentist",
            Role::LoggedOut => "loggedOut",
        }
    }

    /// Roles that can authenticate. `LoggedOut` is a session state,
    /// not a credentialed identity.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::LoggedOut)
    }

    /// Display label shown in the header user badge.
    pub fn display_label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Receptionist => "Receptionist",
            Role::Dentist => "Dentist",
            Role::LoggedOut => "Logged Out",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "receptionist" => Ok(Role::Receptionist),
            "dentist" => Ok(Role::Dentist),
            "loggedOut" => Ok(Role::LoggedOut),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
