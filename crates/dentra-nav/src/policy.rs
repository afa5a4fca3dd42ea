use std::collections::HashMap;

use dentra_core::models::Role;

/// The role→permitted-sections table: the single source of truth for
/// access. Menu visibility is a projection of this table, never the
/// reverse.
///
/// The per-role section lists are ordered; the first entry is the
/// role's landing section after login and the recovery target after a
/// permission denial.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    table: HashMap<Role, Vec<String>>,
}

impl AccessPolicy {
    pub fn new(table: HashMap<Role, Vec<String>>) -> Self {
        Self { table }
    }

    /// The clinic's standard policy. `LoggedOut` is deliberately
    /// absent: that state never reaches the authenticated app.
    pub fn standard() -> Self {
        let mut table = HashMap::new();
        table.insert(
            Role::Admin,
            vec![
                "dashboard",
                "patients",
                "appointments",
                "dental-charting",
                "billing",
                "staff",
                "treatments",
                "payment-methods",
                "reports",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        );
        table.insert(
            Role::Receptionist,
            vec!["dashboard", "patients", "appointments", "billing"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        table.insert(
            Role::Dentist,
            vec![
                "dashboard",
                "patients",
                "appointments",
                "dental-charting",
                "treatments",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        );
        Self::new(table)
    }

    /// Ordered section ids the role may view. Empty for roles absent
    /// from the table — callers treat that as a configuration error.
    pub fn permitted(&self, role: Role) -> &[String] {
        self.table.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_permitted(&self, role: Role, section_id: &str) -> bool {
        self.permitted(role).iter().any(|s| s == section_id)
    }

    /// The role's landing section.
    pub fn first_permitted(&self, role: Role) -> Option<&str> {
        self.permitted(role).first().map(String::as_str)
    }

    /// Section ids whose menu affordances should be visible for the
    /// role — exactly the permitted set, in policy order.
    pub fn visible_sections(&self, role: Role) -> &[String] {
        self.permitted(role)
    }
}
