use serde::{Deserialize, Serialize};

/// Aggregated applicant KPIs consumed by the rule battery. Fields are
/// non-optional by contract: the upstream aggregator must resolve every
/// value before invoking the engine, so "unknown" inputs are unrepresentable
/// here rather than guarded at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnderwritingKpis {
    pub back_end_dti: f64,
    pub ltv: f64,
    pub reserve_months: f64,
}

/// Externally computed loan metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanMetrics {
    pub fico_mid: u16,
}

/// Externally computed fraud-screening signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudSignals {
    pub score: f64,
}
