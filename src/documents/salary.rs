use serde::{Deserialize, Serialize};

use crate::normalize::{parse_amount_opt, round2};

/// Recognized pay-period frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    SemiMonthly,
    Monthly,
}

impl PayFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Biweekly => "biweekly",
            PayFrequency::SemiMonthly => "semi-monthly",
            PayFrequency::Monthly => "monthly",
        }
    }

    /// Mean-weeks-per-month approximations, not exact calendar math.
    pub const fn monthly_factor(self) -> f64 {
        match self {
            PayFrequency::Weekly => 4.333,
            PayFrequency::Biweekly => 2.167,
            PayFrequency::SemiMonthly => 2.0,
            PayFrequency::Monthly => 1.0,
        }
    }
}

/// Raw paystub fields. Absent keys deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaystubFields {
    pub gross_pay: Option<String>,
    pub net_pay: Option<String>,
    pub pay_period: Option<String>,
}

/// Projected income KPIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryKpis {
    pub gross_monthly_income: Option<f64>,
    pub net_monthly_income: Option<f64>,
    pub annualized_gross_income: Option<f64>,
}

/// Infers the pay frequency from free text. Check order matters: "weekly"
/// must not swallow "bi-weekly", so the bare-weekly rule requires the
/// absence of "bi".
pub fn infer_frequency(pay_period: &str) -> Option<PayFrequency> {
    let lowered = pay_period.to_lowercase();
    if lowered.contains("weekly") && !lowered.contains("bi") {
        return Some(PayFrequency::Weekly);
    }
    if lowered.contains("biweekly") || lowered.contains("bi-weekly") {
        return Some(PayFrequency::Biweekly);
    }
    if lowered.contains("semi-monthly")
        || lowered.contains("semimonthly")
        || lowered.contains("twice a month")
    {
        return Some(PayFrequency::SemiMonthly);
    }
    if lowered.contains("monthly") {
        return Some(PayFrequency::Monthly);
    }
    None
}

/// Projects monthly and annual income from a paystub. Each projection is
/// `None` when the pay amount or the frequency is unparseable; a parsed
/// 0.0 amount is a valid datum.
pub fn calculate_paystub_kpis(paystub: &PaystubFields) -> SalaryKpis {
    let gross_pay = parse_amount_opt(paystub.gross_pay.as_deref());
    let net_pay = parse_amount_opt(paystub.net_pay.as_deref());
    let factor = paystub
        .pay_period
        .as_deref()
        .and_then(infer_frequency)
        .map(PayFrequency::monthly_factor);

    let gross_monthly = combine(gross_pay, factor);
    let net_monthly = combine(net_pay, factor);
    let annualized_gross = gross_monthly.map(|monthly| monthly * 12.0);

    SalaryKpis {
        gross_monthly_income: gross_monthly.map(round2),
        net_monthly_income: net_monthly.map(round2),
        annualized_gross_income: annualized_gross.map(round2),
    }
}

fn combine(pay: Option<f64>, factor: Option<f64>) -> Option<f64> {
    match (pay, factor) {
        (Some(pay), Some(factor)) => Some(pay * factor),
        _ => None,
    }
}
