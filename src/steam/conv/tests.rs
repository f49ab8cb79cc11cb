use super::*;

use std::fs;

use chrono::{TimeZone, Utc};

#[test]
fn parse_store_data_success() {
    let raw = fs::read_to_string("test/fixtures/app-details/app-details-413150.json").unwrap();

    let details = parse_store_data(AppId { app_id: 413150 }, &raw).unwrap().unwrap();

    assert_eq!(details.name, Some("Stardew Valley".to_string()));
    assert_eq!(details.categories.len(), 5);
}

#[test]
fn parse_store_data_unsuccessful() {
    let raw = r#"{"666": {"success": false}}"#;

    assert_eq!(parse_store_data(AppId { app_id: 666 }, raw).unwrap(), None);
}

#[test]
fn parse_store_data_other_app() {
    let raw = fs::read_to_string("test/fixtures/app-details/app-details-413150.json").unwrap();

    assert_eq!(parse_store_data(AppId { app_id: 1 }, &raw).unwrap(), None);
}

#[test]
fn parse_store_data_bad_json() {
    assert!(parse_store_data(AppId { app_id: 1 }, "<html>busy</html>").is_err());
}

#[test]
fn parse_release_date_exact_date() {
    let expected = Utc.with_ymd_and_hms(2025, 6, 5, 0, 0, 0).unwrap();

    assert_eq!(parse_release_date("5 Jun, 2025"), Some(expected));
    assert_eq!(parse_release_date("Jun 5, 2025"), Some(expected));
}

#[test]
fn parse_release_date_year() {
    let expected = Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap();
    let actual = parse_release_date("2027");

    assert_eq!(actual, Some(expected));
}

#[test]
fn parse_release_date_month_year() {
    let expected = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();

    assert_eq!(parse_release_date("Apr 2025"), Some(expected));
    assert_eq!(parse_release_date("April 2025"), Some(expected));
}

#[test]
fn parse_release_date_december_rolls_over() {
    let expected = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(parse_release_date("Dec 2025"), Some(expected));
    assert_eq!(parse_release_date("Q4 2025"), Some(expected));
}

#[test]
fn parse_release_date_quarter() {
    let expected = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    let actual = parse_release_date("Q2 2025");

    assert_eq!(actual, Some(expected));
}

#[test]
fn parse_release_date_unknown() {
    assert_eq!(parse_release_date("Coming soon"), None);
    assert_eq!(parse_release_date("To be announced"), None);
    assert_eq!(parse_release_date("Q7 2025"), None);
}

#[test]
fn parse_release_date_huge_year() {
    assert_eq!(parse_release_date("2147483647"), None);
    assert_eq!(parse_release_date("Q4 2147483647"), None);
    assert_eq!(parse_release_date("-2147483648"), None);
}
