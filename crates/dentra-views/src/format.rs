use jiff::civil::{Date, Time};

/// 12-hour clock, e.g. "2:30 PM". Midnight renders as 12 AM, noon as
/// 12 PM.
pub fn format_time(time: Time) -> String {
    let hour24 = time.hour();
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, time.minute(), meridiem)
}

/// Compact date for list cells, e.g. "25 Jul 2024".
pub fn format_date(date: Date) -> String {
    date.strftime("%d %b %Y").to_string()
}

/// Two-decimal dollar amount, e.g. "$150.00".
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}
