use super::*;

#[test]
fn thousands_are_grouped() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1200.0), "1,200");
    assert_eq!(group_thousands(1_234_567.4), "1,234,567");
    assert_eq!(group_thousands(-25_000.0), "-25,000");
}

#[test]
fn rent_prices_are_monthly() {
    assert_eq!(format_price(1200.0, ListingType::Rent), "$1,200/mo");
    assert_eq!(format_price(250_000.0, ListingType::Sale), "$250,000");
}

#[test]
fn labels_match_status() {
    assert_eq!(listing_type_label(ListingType::Sale), "For Sale");
    assert_eq!(moderation_label(ModerationStatus::Pending), "Pending review");
    assert_eq!(report_label(ReportStatus::Resolved), "Resolved");
}

#[test]
fn dates_keep_calendar_part() {
    assert_eq!(format_date(Some("2024-05-01T10:00:00Z")), "2024-05-01");
    assert_eq!(format_date(Some("yesterday")), "yesterday");
    assert_eq!(format_date(Some("  ")), "-");
    assert_eq!(format_date(None), "-");
}

#[test]
fn rooms_are_pluralized() {
    assert_eq!(rooms_label(1), "1 room");
    assert_eq!(rooms_label(3), "3 rooms");
}
