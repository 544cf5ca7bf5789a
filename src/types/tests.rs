use super::{Monetary, MonetaryError, MonthKey, MonthKeyError};
use anyhow::Result;
use chrono::{FixedOffset, TimeZone, Utc};
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_currency_strings() -> Result<()> {
    let test_cases = vec![
        ("$1,234", "$1,234.00"),
        ("$1,670.57", "$1,670.57"),
        ("$0.5", "$0.50"),
        ("100", "$100.00"),
        ("  $12.34  ", "$12.34"),
        ("-$40", "-$40.00"),
        ("$-40.1", "-$40.10"),
        ("$1,234,567.89", "$1,234,567.89"),
        ("$1.", "$1.00"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_parses_thousands_separated_amount_to_whole_units() -> Result<()> {
    let amount = Monetary::from_str("$1,234")?;

    assert_eq!(amount, Monetary::from_units(1234));
    assert_eq!(amount.cents(), 123_400);

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(Monetary::from_str("").is_err());
    assert!(Monetary::from_str("$").is_err());
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("$1.234").is_err());
    assert!(Monetary::from_str("$1.2.3").is_err());
    assert!(Monetary::from_str("$.5").is_err());
    assert!(Monetary::from_str("$,100").is_err());
    assert!(Monetary::from_str("$100,").is_err());
    assert!(Monetary::from_str("--$1").is_err());
    assert!(Monetary::from_str("$1a").is_err());
    assert!(Monetary::from_str("$1,2,3").is_err());
    assert!(Monetary::from_str("$1,,234").is_err());
    assert!(Monetary::from_str("$1234,567").is_err());
    assert!(Monetary::from_str("$12,34").is_err());
}

#[test]
fn test_monetary_reports_overflow_instead_of_wrapping() {
    assert_eq!(Monetary::from_str("$99999999999999999999"), Err(MonetaryError::Overflow));
    assert_eq!(Monetary::from_cents(i64::MAX).checked_add(Monetary::from_cents(1)), None);
    assert_eq!(Monetary::from_cents(i64::MIN).checked_sub(Monetary::from_cents(1)), None);
}

#[test]
fn test_monetary_supports_checked_addition_and_subtraction() -> Result<()> {
    let five = Monetary::from_str("$5")?;
    let total = Monetary::from_str("$1.50")?
        .checked_add(Monetary::from_str("$2.50")?)
        .and_then(|value| value.checked_sub(five));

    assert_eq!(total, Some(Monetary::from_units(-1)));
    assert_eq!(Monetary::from_units(-1).to_plain_string(), "-1.00");
    assert!(Monetary::from_units(-1).is_negative());

    Ok(())
}

#[test]
fn test_month_key_formats_with_zero_padded_month() -> Result<()> {
    assert_eq!(MonthKey::new(2024, 3)?.to_string(), "03-2024");
    assert_eq!(MonthKey::new(2019, 12)?.to_string(), "12-2019");
    assert_eq!(MonthKey::from_str("03-2024")?, MonthKey::new(2024, 3)?);

    Ok(())
}

#[test]
fn test_month_key_rejects_invalid_input() {
    assert!(MonthKey::new(2024, 0).is_err());
    assert!(MonthKey::new(2024, 13).is_err());
    assert!(MonthKey::from_str("3-2024").is_err());
    assert!(MonthKey::from_str("2024-03").is_err());
    assert!(MonthKey::from_str("march").is_err());
    assert_eq!(
        MonthKey::from_timestamp_millis(i64::MAX, &Utc),
        Err(MonthKeyError::TimestampOutOfRange(i64::MAX))
    );
}

#[test]
fn test_month_key_orders_chronologically_across_years() -> Result<()> {
    let mut keys = vec![MonthKey::new(2021, 1)?, MonthKey::new(2020, 12)?, MonthKey::new(2020, 2)?];
    keys.sort();

    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, vec!["02-2020", "12-2020", "01-2021"]);

    Ok(())
}

#[test]
fn test_month_key_uses_calendar_month_of_the_given_timezone() -> Result<()> {
    // 2024-03-31T23:30:00Z
    let timestamp = Utc.with_ymd_and_hms(2024, 3, 31, 23, 30, 0).unwrap().timestamp_millis();
    let ahead = FixedOffset::east_opt(2 * 3600).unwrap();
    let behind = FixedOffset::west_opt(5 * 3600).unwrap();

    assert_eq!(MonthKey::from_timestamp_millis(timestamp, &Utc)?.to_string(), "03-2024");
    assert_eq!(MonthKey::from_timestamp_millis(timestamp, &ahead)?.to_string(), "04-2024");
    assert_eq!(MonthKey::from_timestamp_millis(timestamp, &behind)?.to_string(), "03-2024");

    Ok(())
}

#[test]
fn test_month_key_equal_iff_same_month_and_year() -> Result<()> {
    let first = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().timestamp_millis();
    let last = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap().timestamp_millis();
    let next_month = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap().timestamp_millis();
    let next_year = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap().timestamp_millis();

    let key = MonthKey::from_timestamp_millis(first, &Utc)?;

    assert_eq!(key, MonthKey::from_timestamp_millis(last, &Utc)?);
    assert_ne!(key, MonthKey::from_timestamp_millis(next_month, &Utc)?);
    assert_ne!(key, MonthKey::from_timestamp_millis(next_year, &Utc)?);

    Ok(())
}
