//! Report aggregation tests.

use chrono::{NaiveDate, TimeZone, Utc};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::error::ReportError;
use super::service::ReportService;
use super::types::{ClientPayment, ProfessionEarning, ReportWindow};

fn earning(profession: &str, price: Decimal) -> ProfessionEarning {
    ProfessionEarning {
        profession: profession.to_string(),
        price,
    }
}

fn payment(client_id: Uuid, name: &str, price: Decimal) -> ClientPayment {
    ClientPayment {
        client_id,
        full_name: name.to_string(),
        price,
    }
}

#[test]
fn test_best_profession_picks_highest_total() {
    let rows = vec![
        earning("plumber", dec!(100)),
        earning("electrician", dec!(50)),
    ];

    let best = ReportService::best_profession(&rows).unwrap();
    assert_eq!(best.profession, "plumber");
    assert_eq!(best.total, dec!(100));
}

#[test]
fn test_best_profession_sums_within_group() {
    let rows = vec![
        earning("electrician", dec!(60)),
        earning("plumber", dec!(100)),
        earning("electrician", dec!(70)),
    ];

    let best = ReportService::best_profession(&rows).unwrap();
    assert_eq!(best.profession, "electrician");
    assert_eq!(best.total, dec!(130));
}

#[test]
fn test_best_profession_tie_breaks_lexically() {
    let rows = vec![earning("welder", dec!(100)), earning("carpenter", dec!(100))];

    let best = ReportService::best_profession(&rows).unwrap();
    assert_eq!(best.profession, "carpenter");
}

#[test]
fn test_best_profession_empty_window() {
    assert!(ReportService::best_profession(&[]).is_none());
}

#[test]
fn test_best_clients_orders_descending() {
    let (x, y, z) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let rows = vec![
        payment(x, "X", dec!(300)),
        payment(y, "Y", dec!(500)),
        payment(z, "Z", dec!(100)),
    ];

    let top = ReportService::best_clients(&rows, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, y);
    assert_eq!(top[0].paid, dec!(500));
    assert_eq!(top[1].id, x);
    assert_eq!(top[1].paid, dec!(300));
}

#[test]
fn test_best_clients_sums_per_client() {
    let client = Uuid::new_v4();
    let rows = vec![
        payment(client, "Harry Potter", dec!(200)),
        payment(client, "Harry Potter", dec!(121)),
    ];

    let top = ReportService::best_clients(&rows, 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].paid, dec!(321));
}

#[test]
fn test_best_clients_tie_breaks_by_name() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let rows = vec![payment(b, "Beth", dec!(100)), payment(a, "Ann", dec!(100))];

    let top = ReportService::best_clients(&rows, 2);
    assert_eq!(top[0].full_name, "Ann");
    assert_eq!(top[1].full_name, "Beth");
}

#[test]
fn test_best_clients_limit_truncates() {
    let rows: Vec<ClientPayment> = (0..5)
        .map(|n| payment(Uuid::new_v4(), &format!("client-{n}"), dec!(10)))
        .collect();

    assert_eq!(ReportService::best_clients(&rows, 3).len(), 3);
    assert_eq!(ReportService::best_clients(&rows, 10).len(), 5);
}

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(100, 100)]
fn test_validate_limit_accepts_positive(#[case] raw: i64, #[case] expected: usize) {
    assert_eq!(ReportService::validate_limit(raw).unwrap(), expected);
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(-42)]
fn test_validate_limit_rejects_non_positive(#[case] raw: i64) {
    assert!(matches!(
        ReportService::validate_limit(raw),
        Err(ReportError::InvalidLimit(_))
    ));
}

#[test]
fn test_window_from_dates_includes_both_boundary_days() {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    let window = ReportWindow::from_dates(start, end).unwrap();

    let first_instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let last_instant = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 59).unwrap();
    let after = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

    assert!(window.contains(first_instant));
    assert!(window.contains(last_instant));
    assert!(!window.contains(after));
}

#[test]
fn test_window_single_day() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let window = ReportWindow::from_dates(day, day).unwrap();

    assert!(window.contains(Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()));
    assert!(!window.contains(Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap()));
}

#[test]
fn test_window_rejects_inverted_dates() {
    let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    assert!(matches!(
        ReportWindow::from_dates(start, end),
        Err(ReportError::InvalidDateRange { .. })
    ));
}

#[test]
fn test_window_rejects_inverted_instants() {
    let start = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    assert!(matches!(
        ReportWindow::new(start, end),
        Err(ReportError::InvalidWindow { .. })
    ));
}
