use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("staff member {id} backs a demo login account and cannot be deleted")]
    DemoUserProtected { id: String },
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend rejected {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    #[error("{kind} not found on backend: {id}")]
    NotFound { kind: &'static str, id: String },
}
