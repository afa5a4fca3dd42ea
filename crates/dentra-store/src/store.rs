use std::collections::HashMap;

use jiff::civil::Date;
use tracing::info;

use dentra_core::demo;
use dentra_core::models::{
    Appointment, AppointmentStatus, ChartEntry, Invoice, InvoiceStatus, Patient, Payment,
    PaymentMethod, Staff, Treatment,
};

use crate::error::StoreError;
use crate::ids::IdSequence;

/// The authoritative in-memory collections for the running session.
///
/// The store exclusively owns every entity instance: consumers re-read
/// on each render instead of holding mutable references, and all
/// mutation goes through these methods so ids and cross-collection
/// bookkeeping (payments for paid invoices) stay consistent.
pub struct RecordStore {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    staff: Vec<Staff>,
    treatments: Vec<Treatment>,
    invoices: Vec<Invoice>,
    payments: Vec<Payment>,
    payment_methods: Vec<PaymentMethod>,
    charting: HashMap<String, Vec<ChartEntry>>,
    patient_ids: IdSequence,
    appointment_ids: IdSequence,
    staff_ids: IdSequence,
    invoice_ids: IdSequence,
    payment_ids: IdSequence,
    payment_method_ids: IdSequence,
}

impl RecordStore {
    /// An empty store with fresh id counters.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            appointments: Vec::new(),
            staff: Vec::new(),
            treatments: Vec::new(),
            invoices: Vec::new(),
            payments: Vec::new(),
            payment_methods: Vec::new(),
            charting: HashMap::new(),
            patient_ids: IdSequence::new("P"),
            appointment_ids: IdSequence::new("A"),
            staff_ids: IdSequence::new("D"),
            invoice_ids: IdSequence::new("INV"),
            payment_ids: IdSequence::new("PMT"),
            payment_method_ids: IdSequence::new("PM"),
        }
    }

    /// A store preloaded with the demo dataset, counters seeded past
    /// the preloaded ids.
    pub fn with_demo_data() -> Self {
        let patients = demo::patients();
        let appointments = demo::appointments();
        let staff = demo::staff();
        let invoices = demo::invoices();
        let payments = demo::payments();
        let payment_methods = demo::payment_methods();

        let patient_ids = IdSequence::seeded_from("P", patients.iter().map(|p| p.id.as_str()));
        let appointment_ids =
            IdSequence::seeded_from("A", appointments.iter().map(|a| a.id.as_str()));
        let staff_ids = IdSequence::seeded_from("D", staff.iter().map(|s| s.id.as_str()));
        let invoice_ids = IdSequence::seeded_from("INV", invoices.iter().map(|i| i.id.as_str()));
        let payment_ids = IdSequence::seeded_from("PMT", payments.iter().map(|p| p.id.as_str()));
        let payment_method_ids =
            IdSequence::seeded_from("PM", payment_methods.iter().map(|m| m.id.as_str()));

        Self {
            patients,
            appointments,
            staff,
            treatments: demo::treatments(),
            invoices,
            payments,
            payment_methods,
            charting: demo::charting_history(),
            patient_ids,
            appointment_ids,
            staff_ids,
            invoice_ids,
            payment_ids,
            payment_method_ids,
        }
    }

    // --- Patients ---

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Adds a patient, assigning and returning the next collection id.
    /// The id on the passed value is ignored.
    pub fn add_patient(&mut self, mut patient: Patient) -> String {
        let id = self.patient_ids.next_id();
        patient.id = id.clone();
        info!(id = %id, "patient added");
        self.patients.push(patient);
        id
    }

    pub fn update_patient(&mut self, id: &str, mut updated: Patient) -> Result<&Patient, StoreError> {
        let slot = self
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "patient",
                id: id.to_string(),
            })?;
        updated.id = slot.id.clone();
        *slot = updated;
        Ok(slot)
    }

    pub fn remove_patient(&mut self, id: &str) -> Result<Patient, StoreError> {
        let idx = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "patient",
                id: id.to_string(),
            })?;
        Ok(self.patients.remove(idx))
    }

    /// Replaces the patient collection with records served by the
    /// persistence collaborator, reseeding the id counter past them.
    pub fn replace_patients(&mut self, patients: Vec<Patient>) {
        self.patient_ids = IdSequence::seeded_from("P", patients.iter().map(|p| p.id.as_str()));
        self.patients = patients;
    }

    /// Adopts a record already persisted by the collaborator, keeping
    /// its backend-assigned id.
    pub fn adopt_patient(&mut self, patient: Patient) -> String {
        let id = patient.id.clone();
        self.patients.push(patient);
        self.patient_ids =
            IdSequence::seeded_from("P", self.patients.iter().map(|p| p.id.as_str()));
        id
    }

    // --- Appointments ---

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn add_appointment(&mut self, mut appointment: Appointment) -> String {
        let id = self.appointment_ids.next_id();
        appointment.id = id.clone();
        info!(id = %id, date = %appointment.date, "appointment added");
        self.appointments.push(appointment);
        id
    }

    pub fn update_appointment(
        &mut self,
        id: &str,
        mut updated: Appointment,
    ) -> Result<&Appointment, StoreError> {
        let slot = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "appointment",
                id: id.to_string(),
            })?;
        updated.id = slot.id.clone();
        *slot = updated;
        Ok(slot)
    }

    /// Replaces the appointment collection with records served by the
    /// persistence collaborator, reseeding the id counter past them.
    pub fn replace_appointments(&mut self, appointments: Vec<Appointment>) {
        self.appointment_ids =
            IdSequence::seeded_from("A", appointments.iter().map(|a| a.id.as_str()));
        self.appointments = appointments;
    }

    /// Adopts a record already persisted by the collaborator, keeping
    /// its backend-assigned id.
    pub fn adopt_appointment(&mut self, appointment: Appointment) -> String {
        let id = appointment.id.clone();
        self.appointments.push(appointment);
        self.appointment_ids =
            IdSequence::seeded_from("A", self.appointments.iter().map(|a| a.id.as_str()));
        id
    }

    /// Status transition shared by cancel, check-in, and complete.
    pub fn set_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<&Appointment, StoreError> {
        let slot = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "appointment",
                id: id.to_string(),
            })?;
        info!(id = %slot.id, status = ?status, "appointment status changed");
        slot.status = status;
        Ok(slot)
    }

    // --- Staff ---

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn staff_member(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn add_staff(&mut self, mut member: Staff) -> String {
        let id = self.staff_ids.next_id();
        member.id = id.clone();
        self.staff.push(member);
        id
    }

    pub fn update_staff(&mut self, id: &str, mut updated: Staff) -> Result<&Staff, StoreError> {
        let slot = self
            .staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "staff",
                id: id.to_string(),
            })?;
        updated.id = slot.id.clone();
        // Demo-account linkage is store-managed, not form-editable.
        updated.is_demo_user = slot.is_demo_user;
        *slot = updated;
        Ok(slot)
    }

    /// Staff backing a demo login account cannot be removed.
    pub fn remove_staff(&mut self, id: &str) -> Result<Staff, StoreError> {
        let idx = self
            .staff
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "staff",
                id: id.to_string(),
            })?;
        if self.staff[idx].is_demo_user {
            return Err(StoreError::DemoUserProtected { id: id.to_string() });
        }
        Ok(self.staff.remove(idx))
    }

    // --- Treatments (keyed by stable value, not a generated id) ---

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn treatment(&self, value: &str) -> Option<&Treatment> {
        self.treatments.iter().find(|t| t.value == value)
    }

    pub fn add_treatment(&mut self, treatment: Treatment) {
        self.treatments.push(treatment);
    }

    pub fn update_treatment(
        &mut self,
        value: &str,
        updated: Treatment,
    ) -> Result<&Treatment, StoreError> {
        let slot = self
            .treatments
            .iter_mut()
            .find(|t| t.value == value)
            .ok_or_else(|| StoreError::NotFound {
                kind: "treatment",
                id: value.to_string(),
            })?;
        *slot = updated;
        Ok(slot)
    }

    pub fn remove_treatment(&mut self, value: &str) -> Result<Treatment, StoreError> {
        let idx = self
            .treatments
            .iter()
            .position(|t| t.value == value)
            .ok_or_else(|| StoreError::NotFound {
                kind: "treatment",
                id: value.to_string(),
            })?;
        Ok(self.treatments.remove(idx))
    }

    // --- Invoices and payments ---

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    pub fn add_invoice(&mut self, mut invoice: Invoice) -> String {
        let id = self.invoice_ids.next_id();
        invoice.id = id.clone();
        info!(id = %id, amount = invoice.amount, "invoice created");
        self.invoices.push(invoice);
        id
    }

    pub fn remove_invoice(&mut self, id: &str) -> Result<Invoice, StoreError> {
        let idx = self
            .invoices
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "invoice",
                id: id.to_string(),
            })?;
        Ok(self.invoices.remove(idx))
    }

    /// Updates an invoice's status. Marking it Paid with a method also
    /// stamps the method on the invoice and records a payment dated
    /// `today`. Nothing mutates unless the invoice exists.
    pub fn record_invoice_status(
        &mut self,
        id: &str,
        status: InvoiceStatus,
        method: Option<&str>,
        today: Date,
    ) -> Result<&Invoice, StoreError> {
        let idx = self
            .invoices
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "invoice",
                id: id.to_string(),
            })?;

        self.invoices[idx].status = status;
        if let Some(method) = method {
            self.invoices[idx].method = Some(method.to_string());
            if status == InvoiceStatus::Paid {
                let invoice = &self.invoices[idx];
                let payment = Payment {
                    id: self.payment_ids.next_id(),
                    invoice_id: invoice.id.clone(),
                    patient_id: invoice.patient_id.clone(),
                    patient_name: invoice.patient_name.clone(),
                    date: today,
                    amount: invoice.amount,
                    method: method.to_string(),
                };
                info!(id = %payment.id, invoice = %payment.invoice_id, "payment recorded");
                self.payments.push(payment);
            }
        }
        Ok(&self.invoices[idx])
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    // --- Payment methods ---

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn payment_method(&self, id: &str) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.id == id)
    }

    pub fn add_payment_method(&mut self, mut method: PaymentMethod) -> String {
        let id = self.payment_method_ids.next_id();
        method.id = id.clone();
        self.payment_methods.push(method);
        id
    }

    pub fn update_payment_method(
        &mut self,
        id: &str,
        mut updated: PaymentMethod,
    ) -> Result<&PaymentMethod, StoreError> {
        let slot = self
            .payment_methods
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "payment method",
                id: id.to_string(),
            })?;
        updated.id = slot.id.clone();
        *slot = updated;
        Ok(slot)
    }

    pub fn remove_payment_method(&mut self, id: &str) -> Result<PaymentMethod, StoreError> {
        let idx = self
            .payment_methods
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "payment method",
                id: id.to_string(),
            })?;
        Ok(self.payment_methods.remove(idx))
    }

    // --- Dental charting ---

    pub fn chart_for(&self, patient_id: &str) -> &[ChartEntry] {
        self.charting
            .get(patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn add_chart_entry(&mut self, patient_id: &str, entry: ChartEntry) {
        self.charting
            .entry(patient_id.to_string())
            .or_default()
            .push(entry);
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
