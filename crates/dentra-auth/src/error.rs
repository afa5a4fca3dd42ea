use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Deliberately silent about which field was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("identity provider error: {0}")]
    Provider(String),

    #[error("no profile found for user: {0}")]
    ProfileNotFound(String),

    #[error("session marker store error: {0}")]
    MarkerStore(String),
}
