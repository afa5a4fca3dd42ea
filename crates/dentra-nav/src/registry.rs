use serde::{Deserialize, Serialize};

/// A sub-view within a section. `on_enter` hooks fire every time the
/// tab becomes active (e.g. resetting its form to a blank state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSpec {
    pub id: String,
    pub on_enter: Vec<String>,
}

impl TabSpec {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            on_enter: Vec::new(),
        }
    }

    pub fn with_enter_hook(mut self, hook: &str) -> Self {
        self.on_enter.push(hook.to_string());
        self
    }
}

/// A top-level navigable area. `on_show` hooks fire when the section
/// becomes active, before any tab-entry hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub tabs: Vec<TabSpec>,
    pub on_show: Vec<String>,
}

impl SectionSpec {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            tabs: Vec::new(),
            on_show: Vec::new(),
        }
    }

    pub fn with_tab(mut self, tab: TabSpec) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn with_show_hook(mut self, hook: &str) -> Self {
        self.on_show.push(hook.to_string());
        self
    }

    /// First tab by declaration order — the fallback when no remembered
    /// tab applies.
    pub fn first_tab(&self) -> Option<&TabSpec> {
        self.tabs.first()
    }

    pub fn tab(&self, tab_id: &str) -> Option<&TabSpec> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    /// Header title derived from the id: first letter upper-cased,
    /// dashes turned into spaces ("dental-charting" → "Dental
    /// charting").
    pub fn title(&self) -> String {
        let spaced = self.id.replace('-', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// The declarative map of every section and tab in the application.
/// UI affordances resolve against this registry at render time; no
/// navigation target is ever recovered by parsing markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRegistry {
    sections: Vec<SectionSpec>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// The clinic application's sections and tabs.
    pub fn standard() -> Self {
        Self::new(vec![
            SectionSpec::new("dashboard"),
            SectionSpec::new("patients")
                .with_tab(TabSpec::new("patient-list"))
                .with_tab(TabSpec::new("add-patient").with_enter_hook("reset-patient-form")),
            SectionSpec::new("appointments")
                .with_show_hook("refresh-calendar")
                .with_tab(TabSpec::new("appointment-list"))
                .with_tab(
                    TabSpec::new("add-appointment").with_enter_hook("reset-appointment-form"),
                )
                .with_tab(TabSpec::new("calendar-view")),
            SectionSpec::new("dental-charting")
                .with_show_hook("load-patient-chart")
                .with_show_hook("refresh-teeth-display"),
            SectionSpec::new("billing")
                .with_tab(TabSpec::new("invoices"))
                .with_tab(
                    TabSpec::new("create-invoice")
                        .with_enter_hook("reset-invoice-form")
                        .with_enter_hook("toggle-payment-method-visibility"),
                )
                .with_tab(TabSpec::new("payment-history")),
            SectionSpec::new("staff")
                .with_tab(TabSpec::new("staff-list"))
                .with_tab(TabSpec::new("add-staff").with_enter_hook("reset-staff-form")),
            SectionSpec::new("treatments")
                .with_tab(TabSpec::new("treatment-list"))
                .with_tab(TabSpec::new("add-treatment").with_enter_hook("reset-treatment-form")),
            SectionSpec::new("payment-methods")
                .with_tab(TabSpec::new("method-list"))
                .with_tab(
                    TabSpec::new("add-payment-method")
                        .with_enter_hook("reset-payment-method-form"),
                ),
            SectionSpec::new("reports")
                .with_tab(
                    TabSpec::new("financial-reports").with_enter_hook("update-financial-report"),
                )
                .with_tab(TabSpec::new("patient-reports"))
                .with_tab(TabSpec::new("appointment-reports")),
        ])
    }
}
