//! Converts raw substrings into typed values: currency strings to
//! two-decimal amounts, date+time strings to a single calendar timestamp.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::NormalizationError;

// The few layouts the source system emits.
const DATE_FORMATS: &[&str] = &["%d/%m/%y", "%d/%m/%Y"];
const TIME_FORMATS: &[&str] = &["%I:%M %p", "%H:%M"];

/// Parse a currency string like `Ksh1,234.50` into a non-negative Decimal
/// with two-decimal precision.
///
/// Strips the currency marker and thousands separators, repairs a stray
/// leading or trailing decimal point, and rejects negative signs and
/// non-numeric residue.
pub fn normalize_amount(raw: &str) -> Result<Decimal, NormalizationError> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let unprefixed = if lower.starts_with("ksh") || lower.starts_with("kes") {
        &trimmed[3..]
    } else {
        trimmed
    };

    let mut cleaned: String = unprefixed
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    while cleaned.ends_with('.') {
        cleaned.pop();
    }
    if cleaned.starts_with('.') {
        cleaned.insert(0, '0');
    }

    if cleaned.starts_with('-') {
        return Err(NormalizationError::NegativeAmount { raw: raw.to_string() });
    }

    let mut value: Decimal = cleaned
        .parse()
        .map_err(|_| NormalizationError::InvalidAmount { raw: raw.to_string() })?;
    if value.is_sign_negative() {
        return Err(NormalizationError::NegativeAmount { raw: raw.to_string() });
    }

    value.rescale(2);
    Ok(value)
}

/// Combine raw date and time strings into one calendar timestamp.
///
/// Accepts the fixed format sets above; anything that does not name a real
/// date and time (day 31 in a 30-day month, hour >= 24) is rejected.
pub fn normalize_timestamp(
    date_raw: &str,
    time_raw: &str,
) -> Result<NaiveDateTime, NormalizationError> {
    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_raw.trim(), fmt).ok());
    let time = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time_raw.trim(), fmt).ok());

    match (date, time) {
        (Some(date), Some(time)) => Ok(date.and_time(time)),
        _ => Err(NormalizationError::InvalidTimestamp {
            date: date_raw.to_string(),
            time: time_raw.to_string(),
        }),
    }
}
