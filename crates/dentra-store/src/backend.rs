use dentra_core::models::{Appointment, Patient};

use crate::error::BackendError;

/// The persistence collaborator: an external CRUD service for the two
/// entity kinds the clinic persists remotely. Implementations live
/// with the embedding application; the store only depends on this
/// seam.
///
/// Each returned record is the persisted form (backend-assigned ids
/// included). One request is in flight per component at a time; there
/// is no cancellation machinery.
pub trait RecordBackend {
    fn list_patients(&self) -> impl Future<Output = Result<Vec<Patient>, BackendError>> + Send;

    fn create_patient(
        &self,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, BackendError>> + Send;

    fn update_patient(
        &self,
        id: &str,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, BackendError>> + Send;

    fn list_appointments(
        &self,
    ) -> impl Future<Output = Result<Vec<Appointment>, BackendError>> + Send;

    fn create_appointment(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, BackendError>> + Send;

    fn update_appointment(
        &self,
        id: &str,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, BackendError>> + Send;
}
