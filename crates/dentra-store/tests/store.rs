use jiff::civil::{date, time};

use dentra_core::demo;
use dentra_core::models::{
    Appointment, AppointmentStatus, Invoice, InvoiceStatus, Patient, Staff,
};
use dentra_store::{RecordStore, StoreError};

fn sample_patient(name: &str) -> Patient {
    Patient {
        id: String::new(),
        name: name.to_string(),
        age: 30,
        gender: "Female".to_string(),
        phone: "555-0000".to_string(),
        email: "new@example.com".to_string(),
        address: "1 Test St".to_string(),
        section: "Women's Section".to_string(),
        treatment: "Check-up".to_string(),
        doctor_id: None,
        medical_history: String::new(),
        last_visit: None,
    }
}

fn sample_appointment() -> Appointment {
    Appointment {
        id: String::new(),
        patient_id: "P001".to_string(),
        patient_name: "Sarah Johnson".to_string(),
        section: "Women's Section".to_string(),
        treatment: "Check-up".to_string(),
        doctor_id: Some("D001".to_string()),
        doctor_name: "Dr. ALAN FAHMI".to_string(),
        date: date(2024, 8, 1),
        time: time(9, 0, 0, 0),
        status: AppointmentStatus::Pending,
        notes: String::new(),
    }
}

#[test]
fn fresh_ids_never_collide_with_seeded_records() {
    let mut store = RecordStore::with_demo_data();

    let patient_id = store.add_patient(sample_patient("New Patient"));
    assert_eq!(patient_id, "P006");
    assert!(demo::patients().iter().all(|p| p.id != patient_id));

    let appointment_id = store.add_appointment(sample_appointment());
    assert_eq!(appointment_id, "A010");

    // Counters advance even after a removal; ids are never reused.
    store.remove_patient(&patient_id).unwrap();
    assert_eq!(store.add_patient(sample_patient("Another")), "P007");
}

#[test]
fn ids_are_zero_padded_per_collection() {
    let mut store = RecordStore::new();
    assert_eq!(store.add_patient(sample_patient("A")), "P001");
    assert_eq!(store.add_appointment(sample_appointment()), "A001");
    assert_eq!(store.add_patient(sample_patient("B")), "P002");
}

#[test]
fn update_of_missing_record_leaves_store_unchanged() {
    let mut store = RecordStore::with_demo_data();
    let before = store.patients().len();

    let result = store.update_patient("P999", sample_patient("Ghost"));
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
    assert_eq!(store.patients().len(), before);
}

#[test]
fn update_preserves_the_record_id() {
    let mut store = RecordStore::with_demo_data();
    let mut renamed = sample_patient("Renamed");
    renamed.id = "P999".to_string(); // ignored
    store.update_patient("P002", renamed).unwrap();

    let updated = store.patient("P002").unwrap();
    assert_eq!(updated.id, "P002");
    assert_eq!(updated.name, "Renamed");
}

#[test]
fn demo_staff_cannot_be_deleted() {
    let mut store = RecordStore::with_demo_data();
    let before = store.staff().len();

    // D001 backs a demo login account
    match store.remove_staff("D001") {
        Err(StoreError::DemoUserProtected { id }) => assert_eq!(id, "D001"),
        other => panic!("expected DemoUserProtected, got {other:?}"),
    }
    assert_eq!(store.staff().len(), before);

    // D002 is ordinary staff and can go
    store.remove_staff("D002").unwrap();
    assert_eq!(store.staff().len(), before - 1);
}

#[test]
fn staff_update_cannot_clear_the_demo_marker() {
    let mut store = RecordStore::with_demo_data();
    let mut edited: Staff = store.staff_member("D001").unwrap().clone();
    edited.name = "Renamed Doctor".to_string();
    edited.is_demo_user = false;

    store.update_staff("D001", edited).unwrap();

    let after = store.staff_member("D001").unwrap();
    assert_eq!(after.name, "Renamed Doctor");
    assert!(after.is_demo_user);
}

#[test]
fn paying_an_invoice_records_a_payment() {
    let mut store = RecordStore::with_demo_data();
    let payments_before = store.payments().len();
    let today = date(2024, 7, 25);

    let invoice = store
        .record_invoice_status("INV002", InvoiceStatus::Paid, Some("cash"), today)
        .unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Paid);
    assert_eq!(invoice.method.as_deref(), Some("cash"));

    let payments = store.payments();
    assert_eq!(payments.len(), payments_before + 1);
    let recorded = payments.last().unwrap();
    assert_eq!(recorded.id, "PMT003");
    assert_eq!(recorded.invoice_id, "INV002");
    assert_eq!(recorded.amount, 850.00);
    assert_eq!(recorded.method, "cash");
    assert_eq!(recorded.date, today);
}

#[test]
fn reverting_to_pending_records_no_payment() {
    let mut store = RecordStore::with_demo_data();
    let payments_before = store.payments().len();

    store
        .record_invoice_status("INV004", InvoiceStatus::Pending, Some("cash"), date(2024, 7, 25))
        .unwrap();

    assert_eq!(store.payments().len(), payments_before);
}

#[test]
fn paying_a_missing_invoice_mutates_nothing() {
    let mut store = RecordStore::with_demo_data();
    let payments_before = store.payments().len();

    let result =
        store.record_invoice_status("INV999", InvoiceStatus::Paid, Some("cash"), date(2024, 7, 25));
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
    assert_eq!(store.payments().len(), payments_before);
}

#[test]
fn invoices_get_sequential_ids() {
    let mut store = RecordStore::with_demo_data();
    let id = store.add_invoice(Invoice {
        id: String::new(),
        patient_id: "P001".to_string(),
        patient_name: "Sarah Johnson".to_string(),
        date: date(2024, 8, 1),
        treatment: "Dental Cleaning".to_string(),
        amount: 150.00,
        status: InvoiceStatus::Pending,
        method: None,
        notes: String::new(),
    });
    assert_eq!(id, "INV005");
}

#[test]
fn treatments_are_keyed_by_value() {
    let mut store = RecordStore::with_demo_data();
    assert!(store.treatment("Dental Cleaning").is_some());

    let removed = store.remove_treatment("Dental Cleaning").unwrap();
    assert_eq!(removed.value, "Dental Cleaning");
    assert!(store.treatment("Dental Cleaning").is_none());

    assert!(matches!(
        store.remove_treatment("Dental Cleaning"),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn appointment_status_transitions_apply_in_place() {
    let mut store = RecordStore::with_demo_data();

    let updated = store
        .set_appointment_status("A009", AppointmentStatus::CheckedIn)
        .unwrap();
    assert_eq!(updated.status, AppointmentStatus::CheckedIn);
    assert_eq!(
        store.appointment("A009").unwrap().status,
        AppointmentStatus::CheckedIn
    );
}

#[test]
fn charting_history_accumulates_per_patient() {
    let mut store = RecordStore::with_demo_data();
    let before = store.chart_for("P001").len();
    let mut entry = store.chart_for("P001")[0].clone();
    entry.notes = "Follow-up filling.".to_string();

    store.add_chart_entry("P001", entry);
    assert_eq!(store.chart_for("P001").len(), before + 1);
    assert!(store.chart_for("P999").is_empty());
}
