use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config I/O error: {0}")]
    ConfigIo(String),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    ConfigTooNew { found: u32, supported: u32 },

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid month anchor: year {year}, month {month}")]
    InvalidMonth { year: i16, month: i8 },
}
