use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::parse_date_multi;

/// Raw identity-document fields (passport-style). Absent keys deserialize to
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityDocument {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub passport_number: Option<String>,
    pub expiry_date: Option<String>,
    pub issuing_country: Option<String>,
}

/// Derived verification status; always computed from the validity flag,
/// never independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentVerificationStatus {
    Valid,
    Expired,
    Unknown,
}

impl DocumentVerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentVerificationStatus::Valid => "valid",
            DocumentVerificationStatus::Expired => "expired",
            DocumentVerificationStatus::Unknown => "unknown",
        }
    }

    fn from_validity(valid: Option<bool>) -> Self {
        match valid {
            Some(true) => DocumentVerificationStatus::Valid,
            Some(false) => DocumentVerificationStatus::Expired,
            None => DocumentVerificationStatus::Unknown,
        }
    }
}

/// Typed identity-verification KPIs. Presence flags are plain booleans; the
/// date-derived fields degrade to `None` when the source text is
/// unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityKpis {
    pub age: Option<i32>,
    pub document_valid: Option<bool>,
    pub days_until_expiry: Option<i64>,
    pub document_verification_status: DocumentVerificationStatus,
    pub issuing_country: Option<String>,
    pub has_passport_number: bool,
    pub has_address: bool,
}

/// Whole years since the date of birth, minus one when the birthday has not
/// yet occurred this year.
pub fn calculate_age(date_of_birth: Option<&str>) -> Option<i32> {
    calculate_age_at(date_of_birth, today())
}

pub fn calculate_age_at(date_of_birth: Option<&str>, today: NaiveDate) -> Option<i32> {
    let born = date_of_birth.and_then(parse_date_multi)?;
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    Some(age)
}

/// True iff the parsed expiry date is strictly after today.
pub fn is_document_valid(expiry_date: Option<&str>) -> Option<bool> {
    is_document_valid_at(expiry_date, today())
}

pub fn is_document_valid_at(expiry_date: Option<&str>, today: NaiveDate) -> Option<bool> {
    let expiry = expiry_date.and_then(parse_date_multi)?;
    Some(expiry > today)
}

/// Signed day count until expiry; negative means already expired.
pub fn days_until_expiry(expiry_date: Option<&str>) -> Option<i64> {
    days_until_expiry_at(expiry_date, today())
}

pub fn days_until_expiry_at(expiry_date: Option<&str>, today: NaiveDate) -> Option<i64> {
    let expiry = expiry_date.and_then(parse_date_multi)?;
    Some((expiry - today).num_days())
}

/// Uppercases and collapses internal whitespace runs; an empty result maps
/// to `None`.
pub fn normalize_name(name: Option<&str>) -> Option<String> {
    let collapsed = name?.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_uppercase())
    }
}

/// Similarity between two names: 1.0 on an exact normalized match, otherwise
/// Jaccard similarity of the whitespace-delimited word sets. Punctuation is
/// not stripped, so "SMITH," and "SMITH" are distinct words. `None` when
/// either name is absent or normalizes to empty.
///
/// Exposed for callers that supply a second name to compare against; not
/// wired into [`calculate_identity_kpis`].
pub fn name_match_score(first: Option<&str>, second: Option<&str>) -> Option<f64> {
    let first = normalize_name(first)?;
    let second = normalize_name(second)?;

    if first == second {
        return Some(1.0);
    }

    let first_words: HashSet<&str> = first.split_whitespace().collect();
    let second_words: HashSet<&str> = second.split_whitespace().collect();
    if first_words.is_empty() || second_words.is_empty() {
        return Some(0.0);
    }

    let intersection = first_words.intersection(&second_words).count();
    let union = first_words.union(&second_words).count();
    Some(intersection as f64 / union as f64)
}

/// Identity KPIs evaluated against today's date.
pub fn calculate_identity_kpis(document: &IdentityDocument) -> IdentityKpis {
    calculate_identity_kpis_at(document, today())
}

/// Deterministic variant taking an explicit evaluation date.
pub fn calculate_identity_kpis_at(document: &IdentityDocument, today: NaiveDate) -> IdentityKpis {
    let document_valid = is_document_valid_at(document.expiry_date.as_deref(), today);

    IdentityKpis {
        age: calculate_age_at(document.date_of_birth.as_deref(), today),
        document_valid,
        days_until_expiry: days_until_expiry_at(document.expiry_date.as_deref(), today),
        document_verification_status: DocumentVerificationStatus::from_validity(document_valid),
        issuing_country: document
            .issuing_country
            .clone()
            .filter(|country| !country.is_empty()),
        has_passport_number: is_present(document.passport_number.as_deref()),
        has_address: is_present(document.address.as_deref()),
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
