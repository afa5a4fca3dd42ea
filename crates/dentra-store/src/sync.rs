//! Sync path between the record store and the persistence
//! collaborator.
//!
//! Reads fall back to the in-memory collections when the collaborator
//! fails (the session keeps working on whatever it has); writes
//! propagate the failure so the caller can surface it — either way the
//! store is never left partially mutated.

use tracing::warn;

use dentra_core::models::{Appointment, Patient};

use crate::backend::RecordBackend;
use crate::error::BackendError;
use crate::store::RecordStore;

/// Which side actually served a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncSource {
    Backend,
    InMemoryFallback,
}

pub async fn refresh_patients<B: RecordBackend>(
    backend: &B,
    store: &mut RecordStore,
) -> SyncSource {
    match backend.list_patients().await {
        Ok(patients) => {
            store.replace_patients(patients);
            SyncSource::Backend
        }
        Err(e) => {
            warn!(error = %e, "patient list unavailable, serving in-memory records");
            SyncSource::InMemoryFallback
        }
    }
}

pub async fn refresh_appointments<B: RecordBackend>(
    backend: &B,
    store: &mut RecordStore,
) -> SyncSource {
    match backend.list_appointments().await {
        Ok(appointments) => {
            store.replace_appointments(appointments);
            SyncSource::Backend
        }
        Err(e) => {
            warn!(error = %e, "appointment list unavailable, serving in-memory records");
            SyncSource::InMemoryFallback
        }
    }
}

/// Persists a new patient through the collaborator when one is given,
/// otherwise assigns a local id. Returns the record's id.
pub async fn create_patient<B: RecordBackend>(
    backend: Option<&B>,
    store: &mut RecordStore,
    patient: Patient,
) -> Result<String, BackendError> {
    match backend {
        Some(backend) => {
            let persisted = backend.create_patient(patient).await?;
            Ok(store.adopt_patient(persisted))
        }
        None => Ok(store.add_patient(patient)),
    }
}

pub async fn update_patient<B: RecordBackend>(
    backend: Option<&B>,
    store: &mut RecordStore,
    id: &str,
    patient: Patient,
) -> Result<(), BackendError> {
    match backend {
        Some(backend) => {
            let persisted = backend.update_patient(id, patient).await?;
            store
                .update_patient(id, persisted)
                .map_err(|_| BackendError::NotFound {
                    kind: "patient",
                    id: id.to_string(),
                })?;
            Ok(())
        }
        None => store
            .update_patient(id, patient)
            .map(|_| ())
            .map_err(|_| BackendError::NotFound {
                kind: "patient",
                id: id.to_string(),
            }),
    }
}

pub async fn create_appointment<B: RecordBackend>(
    backend: Option<&B>,
    store: &mut RecordStore,
    appointment: Appointment,
) -> Result<String, BackendError> {
    match backend {
        Some(backend) => {
            let persisted = backend.create_appointment(appointment).await?;
            Ok(store.adopt_appointment(persisted))
        }
        None => Ok(store.add_appointment(appointment)),
    }
}

pub async fn update_appointment<B: RecordBackend>(
    backend: Option<&B>,
    store: &mut RecordStore,
    id: &str,
    appointment: Appointment,
) -> Result<(), BackendError> {
    match backend {
        Some(backend) => {
            let persisted = backend.update_appointment(id, appointment).await?;
            store
                .update_appointment(id, persisted)
                .map_err(|_| BackendError::NotFound {
                    kind: "appointment",
                    id: id.to_string(),
                })?;
            Ok(())
        }
        None => store
            .update_appointment(id, appointment)
            .map(|_| ())
            .map_err(|_| BackendError::NotFound {
                kind: "appointment",
                id: id.to_string(),
            }),
    }
}
