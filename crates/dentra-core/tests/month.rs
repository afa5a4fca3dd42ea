use jiff::civil::date;

use dentra_core::models::MonthAnchor;

#[test]
fn from_date_anchors_on_day_one() {
    let anchor = MonthAnchor::from_date(date(2024, 3, 31));
    assert_eq!(anchor.first_day(), date(2024, 3, 1));
    assert_eq!(anchor.year(), 2024);
    assert_eq!(anchor.month(), 3);
}

#[test]
fn month_navigation_is_reversible_from_a_31_day_month() {
    let start = MonthAnchor::from_date(date(2024, 3, 31));
    assert_eq!(start.succ().pred(), start);
    assert_eq!(start.pred().succ(), start);
    // Stepping back from March lands in February, never on an invalid
    // date.
    assert_eq!(start.pred().first_day(), date(2024, 2, 1));
}

#[test]
fn succ_wraps_across_year_boundary() {
    let december = MonthAnchor::from_date(date(2023, 12, 15));
    let january = december.succ();
    assert_eq!(january.first_day(), date(2024, 1, 1));
    assert_eq!(january.pred(), december);
}

#[test]
fn contains_checks_year_and_month() {
    let july = MonthAnchor::from_date(date(2024, 7, 25));
    assert!(july.contains(date(2024, 7, 1)));
    assert!(july.contains(date(2024, 7, 31)));
    assert!(!july.contains(date(2024, 8, 1)));
    assert!(!july.contains(date(2023, 7, 15)));
}

#[test]
fn label_renders_month_name_and_year() {
    let july = MonthAnchor::from_date(date(2024, 7, 25));
    assert_eq!(july.label(), "July 2024");
}

#[test]
fn new_rejects_out_of_range_month() {
    assert!(MonthAnchor::new(2024, 13).is_err());
    assert!(MonthAnchor::new(2024, 0).is_err());
    assert!(MonthAnchor::new(2024, 12).is_ok());
}

#[test]
fn deserialize_normalizes_stray_day_component() {
    let anchor: MonthAnchor = serde_json::from_str("\"2024-07-25\"").unwrap();
    assert_eq!(anchor.first_day(), date(2024, 7, 1));
}

#[test]
fn serialize_round_trips_through_the_first_of_month() {
    let anchor = MonthAnchor::from_date(date(2024, 7, 25));
    let json = serde_json::to_string(&anchor).unwrap();
    assert_eq!(json, "\"2024-07-01\"");
    let back: MonthAnchor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, anchor);
}
