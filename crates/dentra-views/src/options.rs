use serde::{Deserialize, Serialize};

use dentra_core::models::{Patient, PaymentMethod, Staff, Treatment};

use crate::format::format_currency;
use crate::report::ReportPeriod;

/// A dropdown entry: the stable value submitted with the form and the
/// label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Patient dropdown, sorted by name. Values are patient ids.
pub fn patient_options(patients: &[Patient]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = patients
        .iter()
        .map(|p| SelectOption {
            value: p.id.clone(),
            label: p.name.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// Doctor dropdown for the appointment form: clinical staff only.
pub fn doctor_options(staff: &[Staff]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = staff
        .iter()
        .filter(|s| s.is_clinician())
        .map(|s| SelectOption {
            value: s.id.clone(),
            label: format!("{} ({})", s.name, s.specialty),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// Treatment dropdown with the price shown in the label so the invoice
/// form can preview the amount before selection is confirmed.
pub fn treatment_options(treatments: &[Treatment]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = treatments
        .iter()
        .map(|t| SelectOption {
            value: t.value.clone(),
            label: format!("{} ({})", t.name, format_currency(t.price)),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// The price behind a treatment option, feeding the invoice amount
/// field when a treatment is picked.
pub fn price_for(treatments: &[Treatment], value: &str) -> Option<f64> {
    treatments.iter().find(|t| t.value == value).map(|t| t.price)
}

/// Payment method dropdown, sorted by name. Values are method values
/// ("cash", "credit-card", ...), not ids.
pub fn payment_method_options(methods: &[PaymentMethod]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = methods
        .iter()
        .map(|m| SelectOption {
            value: m.value.clone(),
            label: m.name.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// Reporting period dropdown for the financial reports tab.
pub fn report_period_options() -> Vec<SelectOption> {
    [
        (ReportPeriod::Monthly, "monthly"),
        (ReportPeriod::Quarterly, "quarterly"),
        (ReportPeriod::Yearly, "yearly"),
    ]
    .into_iter()
    .map(|(period, value)| SelectOption {
        value: value.to_string(),
        label: period.display_label().to_string(),
    })
    .collect()
}
