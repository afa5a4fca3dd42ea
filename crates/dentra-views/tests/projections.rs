use jiff::Timestamp;
use jiff::civil::{date, time};

use dentra_core::demo;
use dentra_core::models::{AppointmentStatus, InvoiceStatus, TreatmentCategory};
use dentra_views::badge::{appointment_badge, badge_class, invoice_badge};
use dentra_views::format::{format_currency, format_date, format_time};
use dentra_views::notify::{NoticeLevel, Notifier};
use dentra_views::options::{
    doctor_options, patient_options, payment_method_options, price_for, report_period_options,
    treatment_options,
};
use dentra_views::report::{ReportPeriod, financial_summary};
use dentra_views::rows::{
    AppointmentAction, appointment_actions, appointment_rows, category_icon, invoice_rows,
    patient_rows, payment_method_cards, payment_rows, staff_cards, treatment_cards,
};

#[test]
fn badge_classes_follow_the_status() {
    assert_eq!(appointment_badge(AppointmentStatus::Confirmed), "status-confirmed");
    assert_eq!(appointment_badge(AppointmentStatus::Pending), "status-pending");
    assert_eq!(appointment_badge(AppointmentStatus::Cancelled), "status-danger");
    assert_eq!(appointment_badge(AppointmentStatus::CheckedIn), "status-success");
    assert_eq!(appointment_badge(AppointmentStatus::Completed), "status-success");
    assert_eq!(invoice_badge(InvoiceStatus::Paid), "status-success");
    assert_eq!(invoice_badge(InvoiceStatus::Pending), "status-pending");
    assert_eq!(badge_class("something else"), "status-info");
}

#[test]
fn times_render_on_a_12_hour_clock() {
    assert_eq!(format_time(time(9, 0, 0, 0)), "9:00 AM");
    assert_eq!(format_time(time(14, 15, 0, 0)), "2:15 PM");
    assert_eq!(format_time(time(0, 5, 0, 0)), "12:05 AM");
    assert_eq!(format_time(time(12, 0, 0, 0)), "12:00 PM");
}

#[test]
fn dates_and_currency_render_compactly() {
    assert_eq!(format_date(date(2024, 7, 25)), "25 Jul 2024");
    assert_eq!(format_currency(150.0), "$150.00");
    assert_eq!(format_currency(75.5), "$75.50");
}

#[test]
fn patient_rows_resolve_doctors_and_sort_by_name() {
    let rows = patient_rows(&demo::patients(), &demo::staff());

    let mut names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    let sorted = {
        let mut s = names.clone();
        s.sort();
        s
    };
    assert_eq!(names, sorted);
    names.dedup();
    assert_eq!(names.len(), rows.len());

    // P004 has no assigned doctor
    let unassigned = rows.iter().find(|r| r.id == "P004").unwrap();
    assert_eq!(unassigned.doctor_name, "Unassigned");
    let assigned = rows.iter().find(|r| r.id == "P001").unwrap();
    assert_ne!(assigned.doctor_name, "Unassigned");
}

#[test]
fn patients_without_a_visit_show_na() {
    let mut patients = demo::patients();
    patients[0].last_visit = None;
    let rows = patient_rows(&patients, &demo::staff());
    let row = rows.iter().find(|r| r.id == patients[0].id).unwrap();
    assert_eq!(row.last_visit, "N/A");
}

#[test]
fn appointment_rows_are_chronological() {
    let rows = appointment_rows(&demo::appointments());
    assert_eq!(rows.first().unwrap().id, "A001");
    assert_eq!(rows.last().unwrap().id, "A009");
}

#[test]
fn appointment_actions_follow_the_workflow_state() {
    assert_eq!(
        appointment_actions(AppointmentStatus::Pending),
        vec![
            AppointmentAction::View,
            AppointmentAction::Edit,
            AppointmentAction::Cancel
        ]
    );
    assert_eq!(
        appointment_actions(AppointmentStatus::Cancelled),
        vec![AppointmentAction::View, AppointmentAction::Reschedule]
    );
    assert_eq!(
        appointment_actions(AppointmentStatus::CheckedIn),
        vec![
            AppointmentAction::View,
            AppointmentAction::Chart,
            AppointmentAction::Bill
        ]
    );
    assert_eq!(
        appointment_actions(AppointmentStatus::Completed),
        vec![AppointmentAction::View, AppointmentAction::CreateInvoice]
    );
}

#[test]
fn invoice_and_payment_rows_are_newest_first() {
    let invoices = invoice_rows(&demo::invoices());
    assert_eq!(invoices.first().unwrap().id, "INV004");
    assert_eq!(invoices.last().unwrap().id, "INV001");

    let payments = payment_rows(&demo::payments());
    assert_eq!(payments.first().unwrap().id, "PMT002");
}

#[test]
fn staff_cards_keep_the_demo_marker() {
    let cards = staff_cards(&demo::staff());
    let demo_logins: Vec<&str> = cards
        .iter()
        .filter(|c| c.is_demo_user)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(demo_logins.len(), 2);
    assert!(demo_logins.contains(&"D001"));
    assert!(demo_logins.contains(&"D003"));
}

#[test]
fn treatment_cards_carry_category_icons() {
    assert_eq!(category_icon(TreatmentCategory::Preventive), "fas fa-toothbrush");
    assert_eq!(category_icon(TreatmentCategory::Restorative), "fas fa-fill");
    assert_eq!(category_icon(TreatmentCategory::Cosmetic), "fas fa-smile-beam");
    assert_eq!(category_icon(TreatmentCategory::Surgical), "fas fa-scalpel");
    assert_eq!(category_icon(TreatmentCategory::Orthodontic), "fas fa-tooth");
    assert_eq!(
        category_icon(TreatmentCategory::Diagnostic),
        "fas fa-magnifying-glass"
    );
    assert_eq!(category_icon(TreatmentCategory::Periodontal), "fas fa-mouth");
    assert_eq!(category_icon(TreatmentCategory::Prosthodontics), "fas fa-crown");

    let cards = treatment_cards(&demo::treatments());
    let cleaning = cards.iter().find(|c| c.value == "Dental Cleaning").unwrap();
    assert_eq!(cleaning.icon, "fas fa-toothbrush");
    assert_eq!(cleaning.price, "$150.00");
    assert_eq!(cleaning.description, "No description provided.");
}

#[test]
fn payment_method_cards_fall_back_to_a_default_icon() {
    let mut methods = demo::payment_methods();
    methods[0].icon = String::new();
    let cards = payment_method_cards(&methods);

    let cash = cards.iter().find(|c| c.value == "cash").unwrap();
    assert_eq!(cash.icon, "fas fa-money-bill-transfer");
    let card = cards.iter().find(|c| c.value == "credit-card").unwrap();
    assert_eq!(card.icon, "far fa-credit-card");
}

#[test]
fn dropdowns_are_sorted_and_doctor_options_exclude_non_clinicians() {
    let patients = patient_options(&demo::patients());
    assert_eq!(patients.len(), demo::patients().len());
    let labels: Vec<&str> = patients.iter().map(|o| o.label.as_str()).collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);

    let doctors = doctor_options(&demo::staff());
    let clinician_count = demo::staff().iter().filter(|s| s.is_clinician()).count();
    assert_eq!(doctors.len(), clinician_count);
    assert!(doctors.len() < demo::staff().len());
}

#[test]
fn treatment_options_feed_the_invoice_amount() {
    let treatments = demo::treatments();
    let options = treatment_options(&treatments);
    let cleaning = options
        .iter()
        .find(|o| o.value == "Dental Cleaning")
        .unwrap();
    assert!(cleaning.label.contains("$150.00"));

    assert_eq!(price_for(&treatments, "Root Canal"), Some(850.0));
    assert_eq!(price_for(&treatments, "no-such-treatment"), None);
}

#[test]
fn payment_method_options_use_values_not_ids() {
    let options = payment_method_options(&demo::payment_methods());
    assert!(options.iter().any(|o| o.value == "cash"));
    assert!(options.iter().all(|o| !o.value.starts_with("PM")));
}

#[test]
fn report_periods_cover_month_quarter_year() {
    let options = report_period_options();
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["monthly", "quarterly", "yearly"]);

    let today = date(2024, 8, 15);
    assert_eq!(ReportPeriod::Monthly.start(today), date(2024, 8, 1));
    assert_eq!(ReportPeriod::Quarterly.start(today), date(2024, 7, 1));
    assert_eq!(ReportPeriod::Yearly.start(today), date(2024, 1, 1));
}

#[test]
fn financial_summary_splits_collected_from_outstanding() {
    // All four demo invoices fall in 2023; a yearly report dated late
    // 2023 covers them all.
    let today = date(2023, 12, 31);
    let summary = financial_summary(&demo::invoices(), ReportPeriod::Yearly, today);

    assert_eq!(summary.total_billed, 150.0 + 850.0 + 75.0 + 200.0);
    assert_eq!(summary.total_collected, 150.0 + 75.0);
    assert_eq!(summary.outstanding, 850.0 + 200.0);
}

#[test]
fn financial_summary_ignores_invoices_outside_the_period() {
    let today = date(2023, 3, 31);
    let summary = financial_summary(&demo::invoices(), ReportPeriod::Monthly, today);

    // Only INV002 (Mar 10, pending) and INV003 (Mar 22, paid)
    assert_eq!(summary.total_billed, 850.0 + 75.0);
    assert_eq!(summary.total_collected, 75.0);
    assert_eq!(summary.outstanding, 850.0);
}

#[test]
fn notices_expire_and_can_be_dismissed() {
    let mut notifier = Notifier::default();
    let t0: Timestamp = "2024-07-25T09:00:00Z".parse().unwrap();

    let first = notifier.push(NoticeLevel::Success, "Appointment saved", t0);
    let _second = notifier.push(NoticeLevel::Error, "Permission denied", t0);
    assert_eq!(notifier.notices().len(), 2);

    notifier.dismiss(first);
    assert_eq!(notifier.notices().len(), 1);
    // Dismissing again is harmless
    notifier.dismiss(first);
    assert_eq!(notifier.notices().len(), 1);

    let later: Timestamp = "2024-07-25T09:00:06Z".parse().unwrap();
    notifier.expire_before(later);
    assert!(notifier.is_empty());
}

#[test]
fn fresh_notices_survive_an_expiry_sweep() {
    let mut notifier = Notifier::default();
    let t0: Timestamp = "2024-07-25T09:00:00Z".parse().unwrap();
    let t3: Timestamp = "2024-07-25T09:00:03Z".parse().unwrap();

    notifier.push(NoticeLevel::Info, "Old", t0);
    notifier.push(NoticeLevel::Info, "New", t3);

    let t5: Timestamp = "2024-07-25T09:00:05Z".parse().unwrap();
    notifier.expire_before(t5);
    assert_eq!(notifier.notices().len(), 1);
    assert_eq!(notifier.notices()[0].message, "New");
}
