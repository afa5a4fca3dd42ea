use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: Date,
    pub treatment: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    /// Payment method value ("cash", "credit-card", ...), set once the
    /// invoice is paid.
    pub method: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn display_label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
        }
    }
}

/// A recorded payment against an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Payment {
    pub id: String,
    pub invoice_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: Date,
    pub amount: f64,
    pub method: String,
}

/// An accepted way to settle an invoice. `value` is the stable key
/// referenced by invoices and payments.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentMethod {
    pub id: String,
    pub value: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}
