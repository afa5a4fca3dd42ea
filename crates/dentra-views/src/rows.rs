use serde::{Deserialize, Serialize};

use dentra_core::models::{
    Appointment, AppointmentStatus, Invoice, Patient, Payment, PaymentMethod, Staff, Treatment,
    TreatmentCategory,
};

use crate::badge::{appointment_badge, invoice_badge};
use crate::format::{format_currency, format_date, format_time};

/// One-click row actions for an appointment, offered per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentAction {
    View,
    Edit,
    Cancel,
    Reschedule,
    Chart,
    Bill,
    CreateInvoice,
}

/// The actions an appointment row exposes. View is always available;
/// the rest follow the appointment's place in the workflow.
pub fn appointment_actions(status: AppointmentStatus) -> Vec<AppointmentAction> {
    let mut actions = vec![AppointmentAction::View];
    match status {
        AppointmentStatus::Pending | AppointmentStatus::Confirmed => {
            actions.push(AppointmentAction::Edit);
            actions.push(AppointmentAction::Cancel);
        }
        AppointmentStatus::Cancelled => actions.push(AppointmentAction::Reschedule),
        AppointmentStatus::CheckedIn => {
            actions.push(AppointmentAction::Chart);
            actions.push(AppointmentAction::Bill);
        }
        AppointmentStatus::Completed => actions.push(AppointmentAction::CreateInvoice),
    }
    actions
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRow {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub phone: String,
    pub section: String,
    pub treatment: String,
    pub doctor_name: String,
    pub last_visit: String,
}

/// Patient list rows sorted by name, with the assigned doctor resolved
/// against the staff roster.
pub fn patient_rows(patients: &[Patient], staff: &[Staff]) -> Vec<PatientRow> {
    let mut rows: Vec<PatientRow> = patients
        .iter()
        .map(|p| PatientRow {
            id: p.id.clone(),
            name: p.name.clone(),
            age: p.age,
            gender: p.gender.clone(),
            phone: p.phone.clone(),
            section: p.section.clone(),
            treatment: p.treatment.clone(),
            doctor_name: p
                .doctor_id
                .as_deref()
                .and_then(|id| staff.iter().find(|s| s.id == id))
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "Unassigned".to_string()),
            last_visit: p
                .last_visit
                .map(format_date)
                .unwrap_or_else(|| "N/A".to_string()),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub treatment: String,
    pub date: String,
    pub time: String,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub actions: Vec<AppointmentAction>,
}

/// Appointment list rows in chronological order.
pub fn appointment_rows(appointments: &[Appointment]) -> Vec<AppointmentRow> {
    let mut ordered: Vec<&Appointment> = appointments.iter().collect();
    ordered.sort_by_key(|a| (a.date, a.time));
    ordered
        .into_iter()
        .map(|a| AppointmentRow {
            id: a.id.clone(),
            patient_name: a.patient_name.clone(),
            doctor_name: a.doctor_name.clone(),
            treatment: a.treatment.clone(),
            date: format_date(a.date),
            time: format_time(a.time),
            status_label: a.status.display_label(),
            badge_class: appointment_badge(a.status),
            actions: appointment_actions(a.status),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub id: String,
    pub patient_name: String,
    pub date: String,
    pub treatment: String,
    pub amount: String,
    pub status_label: &'static str,
    pub badge_class: &'static str,
}

/// Invoice rows, most recent first.
pub fn invoice_rows(invoices: &[Invoice]) -> Vec<InvoiceRow> {
    let mut ordered: Vec<&Invoice> = invoices.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
        .into_iter()
        .map(|i| InvoiceRow {
            id: i.id.clone(),
            patient_name: i.patient_name.clone(),
            date: format_date(i.date),
            treatment: i.treatment.clone(),
            amount: format_currency(i.amount),
            status_label: i.status.display_label(),
            badge_class: invoice_badge(i.status),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    pub id: String,
    pub invoice_id: String,
    pub patient_name: String,
    pub date: String,
    pub amount: String,
    pub method: String,
}

/// Payment history rows, most recent first.
pub fn payment_rows(payments: &[Payment]) -> Vec<PaymentRow> {
    let mut ordered: Vec<&Payment> = payments.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
        .into_iter()
        .map(|p| PaymentRow {
            id: p.id.clone(),
            invoice_id: p.invoice_id.clone(),
            patient_name: p.patient_name.clone(),
            date: format_date(p.date),
            amount: format_currency(p.amount),
            method: p.method.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCard {
    pub id: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    /// Shown with a demo-account marker and protected from deletion.
    pub is_demo_user: bool,
}

pub fn staff_cards(staff: &[Staff]) -> Vec<StaffCard> {
    let mut cards: Vec<StaffCard> = staff
        .iter()
        .map(|s| StaffCard {
            id: s.id.clone(),
            name: s.name.clone(),
            role: s.role.clone(),
            specialty: s.specialty.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            is_demo_user: s.is_demo_user,
        })
        .collect();
    cards.sort_by(|a, b| a.name.cmp(&b.name));
    cards
}

/// Font Awesome class for a treatment category card.
pub fn category_icon(category: TreatmentCategory) -> &'static str {
    match category {
        TreatmentCategory::Preventive => "fas fa-toothbrush",
        TreatmentCategory::Restorative => "fas fa-fill",
        TreatmentCategory::Cosmetic => "fas fa-smile-beam",
        TreatmentCategory::Surgical => "fas fa-scalpel",
        TreatmentCategory::Orthodontic => "fas fa-tooth",
        TreatmentCategory::Diagnostic => "fas fa-magnifying-glass",
        TreatmentCategory::Periodontal => "fas fa-mouth",
        TreatmentCategory::Prosthodontics => "fas fa-crown",
        TreatmentCategory::Other => "fas fa-tooth",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentCard {
    pub value: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration_minutes: u32,
    pub category_label: &'static str,
    pub icon: &'static str,
}

pub fn treatment_cards(treatments: &[Treatment]) -> Vec<TreatmentCard> {
    let mut cards: Vec<TreatmentCard> = treatments
        .iter()
        .map(|t| TreatmentCard {
            value: t.value.clone(),
            name: t.name.clone(),
            description: t
                .description
                .clone()
                .unwrap_or_else(|| "No description provided.".to_string()),
            price: format_currency(t.price),
            duration_minutes: t.duration_minutes,
            category_label: t.category.display_label(),
            icon: category_icon(t.category),
        })
        .collect();
    cards.sort_by(|a, b| a.name.cmp(&b.name));
    cards
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodCard {
    pub id: String,
    pub value: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

pub fn payment_method_cards(methods: &[PaymentMethod]) -> Vec<PaymentMethodCard> {
    let mut cards: Vec<PaymentMethodCard> = methods
        .iter()
        .map(|m| PaymentMethodCard {
            id: m.id.clone(),
            value: m.value.clone(),
            name: m.name.clone(),
            description: if m.description.is_empty() {
                "No description provided.".to_string()
            } else {
                m.description.clone()
            },
            icon: if m.icon.contains("fa-") {
                m.icon.clone()
            } else {
                "fas fa-money-bill-transfer".to_string()
            },
        })
        .collect();
    cards.sort_by(|a, b| a.name.cmp(&b.name));
    cards
}
