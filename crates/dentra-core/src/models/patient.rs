use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Clinic area label, e.g. "Women's Section".
    pub section: String,
    /// Treatment plan label shown in the patient list.
    pub treatment: String,
    pub doctor_id: Option<String>,
    pub medical_history: String,
    pub last_visit: Option<Date>,
}
