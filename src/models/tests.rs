#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_new_expense_has_no_id() {
    let e = Expense::new(day("2024-03-01"), dec!(10.50), "Business".into());
    assert!(e.id.is_none());
    assert_eq!(e.date, day("2024-03-01"));
    assert_eq!(e.amount, dec!(10.50));
    assert_eq!(e.category, "Business");
}

// ── ReportFormat ──────────────────────────────────────────────

#[test]
fn test_format_display() {
    assert_eq!(ReportFormat::Text.to_string(), "Text");
    assert_eq!(ReportFormat::Csv.to_string(), "CSV");
    assert_eq!(ReportFormat::Excel.to_string(), "Excel");
    assert_eq!(ReportFormat::Pdf.to_string(), "PDF");
}

// ── ReportRequest ─────────────────────────────────────────────

#[test]
fn test_empty_category_means_all() {
    let r = ReportRequest::new(
        day("2024-01-01"),
        day("2024-12-31"),
        "",
        "out.txt",
        ReportFormat::Text,
    );
    assert!(r.category.is_none());
    assert_eq!(r.category_label(), "");
}

#[test]
fn test_category_is_kept_verbatim() {
    let r = ReportRequest::new(
        day("2024-01-01"),
        day("2024-12-31"),
        "business",
        "out.txt",
        ReportFormat::Csv,
    );
    // No case normalization or trimming on the filter.
    assert_eq!(r.category.as_deref(), Some("business"));
    assert_eq!(r.category_label(), "business");
}
