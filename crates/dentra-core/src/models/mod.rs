pub mod appointment;
pub mod billing;
pub mod charting;
pub mod month;
pub mod patient;
pub mod role;
pub mod staff;
pub mod treatment;

pub use appointment::{Appointment, AppointmentStatus};
pub use billing::{Invoice, InvoiceStatus, Payment, PaymentMethod};
pub use charting::ChartEntry;
pub use month::MonthAnchor;
pub use patient::Patient;
pub use role::Role;
pub use staff::Staff;
pub use treatment::{Treatment, TreatmentCategory};
