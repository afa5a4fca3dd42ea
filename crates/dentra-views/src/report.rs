use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use dentra_core::models::{Invoice, InvoiceStatus};

/// Reporting window for the financial summary, anchored on today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

impl ReportPeriod {
    pub fn display_label(&self) -> &'static str {
        match self {
            ReportPeriod::Monthly => "This Month",
            ReportPeriod::Quarterly => "This Quarter",
            ReportPeriod::Yearly => "This Year",
        }
    }

    /// First day of the period containing `today`.
    pub fn start(&self, today: Date) -> Date {
        let first = today.first_of_month();
        let months_back = match self {
            ReportPeriod::Monthly => 0,
            ReportPeriod::Quarterly => i64::from(today.month() - 1) % 3,
            ReportPeriod::Yearly => i64::from(today.month() - 1),
        };
        first.saturating_sub(months_back.months())
    }

    pub fn contains(&self, today: Date, date: Date) -> bool {
        date >= self.start(today) && date <= today
    }
}

/// Aggregate billing figures for a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_billed: f64,
    pub total_collected: f64,
    pub outstanding: f64,
}

/// Sum the invoices dated within the period: everything billed, the
/// paid portion collected, and the difference still outstanding.
pub fn financial_summary(invoices: &[Invoice], period: ReportPeriod, today: Date) -> FinancialSummary {
    let mut total_billed = 0.0;
    let mut total_collected = 0.0;
    for invoice in invoices {
        if !period.contains(today, invoice.date) {
            continue;
        }
        total_billed += invoice.amount;
        if invoice.status == InvoiceStatus::Paid {
            total_collected += invoice.amount;
        }
    }
    FinancialSummary {
        total_billed,
        total_collected,
        outstanding: total_billed - total_collected,
    }
}
