//! Display formatting for prices, labels, and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{ListingType, ModerationStatus, ReportStatus};

/// `1234567.0` -> `"1,234,567"`. Fractions are rounded away.
pub fn group_thousands(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,200/mo` for rentals, `$250,000` for sales.
pub fn format_price(price: f64, listing_type: ListingType) -> String {
    let amount = group_thousands(price);
    match listing_type {
        ListingType::Rent => format!("${amount}/mo"),
        ListingType::Sale => format!("${amount}"),
    }
}

pub fn listing_type_label(listing_type: ListingType) -> &'static str {
    match listing_type {
        ListingType::Rent => "For Rent",
        ListingType::Sale => "For Sale",
    }
}

pub fn moderation_label(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Pending => "Pending review",
        ModerationStatus::Approved => "Approved",
        ModerationStatus::Rejected => "Rejected",
    }
}

pub fn report_label(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Open => "Open",
        ReportStatus::Resolved => "Resolved",
    }
}

/// Calendar date of an ISO-8601 timestamp; anything else is shown as-is.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_owned();
    };
    match raw.split_once('T') {
        Some((date, _)) if date.len() == 10 => date.to_owned(),
        _ => raw.to_owned(),
    }
}

/// `"2 rooms"`, `"1 room"`.
pub fn rooms_label(rooms: u32) -> String {
    if rooms == 1 { "1 room".to_owned() } else { format!("{rooms} rooms") }
}
