//! Shared value normalizers turning free-text document fields into typed
//! values. Callers treat any failure as "unknown", never as zero.

use chrono::{NaiveDate, NaiveDateTime};

/// Raised when an amount field is not numeric after cleansing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value {text:?} is not a numeric amount")]
pub struct ParseAmountError {
    pub text: String,
}

/// Date formats tried in fixed priority order. Day/month-ambiguous numeric
/// formats rely on list position as the tie-break policy.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",          // 2001-07-20
    "%d %b %Y",          // 20 Jul 2001
    "%d/%m/%Y",          // 20/07/2001
    "%m/%d/%Y",          // 07/20/2001
    "%Y-%m-%d %H:%M:%S", // 2001-07-20 00:00:00
    "%d-%m-%Y",          // 20-07-2001
    "%Y/%m/%d",          // 2001/07/20
];

/// Parses a monetary amount, stripping thousands separators, dollar signs,
/// and whitespace first.
pub fn parse_amount(value: &str) -> Result<f64, ParseAmountError> {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '$')
        .collect();

    // "nan"/"inf" parse as f64 but are not amounts; reject them so they
    // cannot poison aggregates or saturate integer casts downstream.
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| ParseAmountError {
            text: value.trim().to_string(),
        })
}

/// Optional-input variant of [`parse_amount`]: absent, empty, and malformed
/// input all map to `None`.
pub fn parse_amount_opt(value: Option<&str>) -> Option<f64> {
    value.and_then(|text| parse_amount(text).ok())
}

/// Parses an integer field, tolerating decimal-formatted integers such as
/// "12.0" by going through a float intermediate. Missing and malformed input
/// both yield `None`; this layer deliberately does not distinguish the two.
pub fn parse_integer_opt(value: Option<&str>) -> Option<i64> {
    parse_amount_opt(value).map(|parsed| parsed as i64)
}

/// Tries each supported date format in priority order, first match wins.
pub fn parse_date_multi(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if format.contains("%H") {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(datetime.date());
            }
        } else if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

/// Classifies free text against ordered indicator lists: any "none" indicator
/// substring wins first (`Some(false)`), then any presence indicator
/// (`Some(true)`), otherwise `None`. Substring matching means embedded
/// negations ("no evidence of default") resolve by list priority.
pub fn classify_presence_text(
    value: &str,
    none_indicators: &[&str],
    presence_indicators: &[&str],
) -> Option<bool> {
    let lowered = value.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    if none_indicators.iter().any(|flag| lowered.contains(flag)) {
        return Some(false);
    }
    if presence_indicators.iter().any(|flag| lowered.contains(flag)) {
        return Some(true);
    }

    None
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
