use serde::{Deserialize, Serialize};

use crate::normalize::{
    classify_presence_text, parse_amount_opt, parse_integer_opt, round2, round4,
};

/// Shared "explicitly none" indicators. Substrings like "no" and "na" can
/// misfire on unrelated text; the priority order below is the documented
/// tie-break, not a defect to patch here.
const NONE_INDICATORS: &[&str] = &["none", "no", "nil", "zero", "0", "n/a", "na"];

const DELINQUENCY_INDICATORS: &[&str] = &[
    "delinquent",
    "delinquency",
    "default",
    "collection",
    "overdue",
    "late payment",
    "past due",
    "charge-off",
];

const BANKRUPTCY_INDICATORS: &[&str] = &[
    "bankruptcy",
    "chapter 7",
    "chapter 11",
    "chapter 13",
    "filed",
    "discharged",
    "foreclosure",
];

/// Raw credit-bureau fields. Absent keys deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditReportFields {
    pub credit_score: Option<String>,
    pub total_debt: Option<String>,
    pub open_credit_lines: Option<String>,
    pub monthly_debt_payments: Option<String>,
    pub delinquencies_defaults_collections: Option<String>,
    pub bankruptcy_history: Option<String>,
    pub hard_inquiries_last_12_months: Option<String>,
}

/// Categorical credit health derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl CreditHealth {
    pub const fn label(self) -> &'static str {
        match self {
            CreditHealth::Excellent => "excellent",
            CreditHealth::Good => "good",
            CreditHealth::Fair => "fair",
            CreditHealth::Poor => "poor",
            CreditHealth::Unknown => "unknown",
        }
    }

    /// Step function on the credit score; inclusive lower bounds evaluated
    /// highest-first.
    fn from_score(score: Option<i64>) -> Self {
        match score {
            Some(score) if score >= 750 => CreditHealth::Excellent,
            Some(score) if score >= 700 => CreditHealth::Good,
            Some(score) if score >= 650 => CreditHealth::Fair,
            Some(_) => CreditHealth::Poor,
            None => CreditHealth::Unknown,
        }
    }
}

/// Typed credit-report KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditKpis {
    pub credit_score: Option<i64>,
    pub total_debt: Option<f64>,
    pub open_credit_lines: Option<i64>,
    pub monthly_debt_payments: Option<f64>,
    pub debt_to_income_ratio: Option<f64>,
    pub has_delinquencies: Option<bool>,
    pub has_bankruptcy: Option<bool>,
    pub hard_inquiries_count: Option<i64>,
    pub credit_health_score: CreditHealth,
}

/// Detects delinquencies/defaults/collections in a free-text summary field.
pub fn detect_delinquencies(summary: Option<&str>) -> Option<bool> {
    summary.and_then(|text| classify_presence_text(text, NONE_INDICATORS, DELINQUENCY_INDICATORS))
}

/// Detects bankruptcy history in a free-text summary field.
pub fn detect_bankruptcy(summary: Option<&str>) -> Option<bool> {
    summary.and_then(|text| classify_presence_text(text, NONE_INDICATORS, BANKRUPTCY_INDICATORS))
}

/// Field-by-field transform of a credit report into typed KPIs. The DTI is
/// computed only when a positive monthly income is supplied and the debt
/// payments field parsed; a parsed 0.0 debt is a valid datum and yields a
/// 0.0 ratio.
pub fn calculate_credit_report_kpis(
    report: &CreditReportFields,
    monthly_income: Option<f64>,
) -> CreditKpis {
    let credit_score = parse_integer_opt(report.credit_score.as_deref());
    let total_debt = parse_amount_opt(report.total_debt.as_deref());
    let open_credit_lines = parse_integer_opt(report.open_credit_lines.as_deref());
    let monthly_debt_payments = parse_amount_opt(report.monthly_debt_payments.as_deref());
    let hard_inquiries_count = parse_integer_opt(report.hard_inquiries_last_12_months.as_deref());

    let has_delinquencies =
        detect_delinquencies(report.delinquencies_defaults_collections.as_deref());
    let has_bankruptcy = detect_bankruptcy(report.bankruptcy_history.as_deref());

    let debt_to_income_ratio = match (monthly_income, monthly_debt_payments) {
        (Some(income), Some(debt)) if income > 0.0 => Some(round4(debt / income)),
        _ => None,
    };

    CreditKpis {
        credit_score,
        total_debt: total_debt.map(round2),
        open_credit_lines,
        monthly_debt_payments: monthly_debt_payments.map(round2),
        debt_to_income_ratio,
        has_delinquencies,
        has_bankruptcy,
        hard_inquiries_count,
        credit_health_score: CreditHealth::from_score(credit_score),
    }
}
