use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Staff {
    pub id: String,
    pub name: String,
    /// Professional role label ("Dentist", "Endodontist", ...), not an
    /// authorization level.
    pub role: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub address: String,
    pub image_url: Option<String>,
    /// Staff member backs one of the demo login accounts; protected
    /// from deletion.
    #[serde(default)]
    pub is_demo_user: bool,
}

impl Staff {
    /// Clinical roles eligible for the doctor dropdown on the
    /// appointment form.
    pub fn is_clinician(&self) -> bool {
        matches!(
            self.role.as_str(),
            "Dentist" | "Endodontist" | "Orthodontist" | "Oral Surgeon"
        )
    }
}
