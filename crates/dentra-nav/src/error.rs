use thiserror::Error;

use dentra_core::models::Role;

#[derive(Debug, Error)]
pub enum NavError {
    /// An authenticated role with no permitted sections has no valid
    /// landing page. The caller must force logout; there is no safe
    /// authenticated state to fall back to.
    #[error("no permitted sections for role {role}")]
    NoPermittedSections { role: Role },
}
