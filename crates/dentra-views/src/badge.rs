use dentra_core::models::{AppointmentStatus, InvoiceStatus};

/// CSS badge class for a status label. Unrecognized labels fall back
/// to the neutral badge rather than rendering unstyled.
pub fn badge_class(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "confirmed" => "status-confirmed",
        "pending" => "status-pending",
        "cancelled" => "status-danger",
        "checked in" | "completed" | "paid" => "status-success",
        _ => "status-info",
    }
}

pub fn appointment_badge(status: AppointmentStatus) -> &'static str {
    badge_class(status.display_label())
}

pub fn invoice_badge(status: InvoiceStatus) -> &'static str {
    badge_class(status.display_label())
}
