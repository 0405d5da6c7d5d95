use serde::{Deserialize, Serialize};

/// Threshold configuration for the hard rejection battery, supplied
/// fully-formed by an external loader. Percent-like thresholds are
/// fractional, e.g. `0.45` for 45%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardRuleConfig {
    pub min_fico: u16,
    pub max_dti: f64,
    pub max_ltv: f64,
    pub min_reserves: f64,
    pub fraud_fail_score: f64,
}
