use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Current config version. Bump this when adding fields or changing
/// shape. Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub clinic_name: String,
    /// Sync patients/appointments through the persistence collaborator
    /// instead of the in-memory demo collections.
    #[serde(default)]
    pub use_backend_records: bool,
    /// Authenticate through the external identity provider instead of
    /// the local credential table.
    #[serde(default)]
    pub use_external_auth: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            clinic_name: "Alan Dental Clinic".to_string(),
            use_backend_records: false,
            use_external_auth: false,
        }
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, CoreError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CoreError::ConfigIo(format!("failed to read {}: {e}", path.display())))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to
/// [`CURRENT_VERSION`]. Each migration is a pure transform on the raw
/// JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::ConfigTooNew {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add the collaborator flags, both off
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| CoreError::ConfigIo("config is not a JSON object".to_string()))?;
        obj.entry("use_backend_records")
            .or_insert(serde_json::Value::Bool(false));
        obj.entry("use_external_auth")
            .or_insert(serde_json::Value::Bool(false));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added collaborator flags)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| CoreError::ConfigIo(format!("failed to create {}: {e}", dir.display())))?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())
        .map_err(|e| CoreError::ConfigIo(format!("failed to write {}: {e}", tmp_path.display())))?;
    std::fs::rename(&tmp_path, path)
        .map_err(|e| CoreError::ConfigIo(format!("failed to rename to {}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
