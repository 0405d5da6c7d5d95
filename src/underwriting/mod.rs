//! Deterministic hard-fail underwriting checks over the aggregated KPI set.

mod config;
mod domain;

pub use config::HardRuleConfig;
pub use domain::{FraudSignals, LoanMetrics, UnderwritingKpis};

use serde::{Deserialize, Serialize};

/// Outcome of one rule-battery evaluation. `passed` is true iff no reason
/// accumulated; `reasons` preserves check-evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub passed: bool,
    pub reasons: Vec<String>,
}

/// Stateless evaluator applying the threshold configuration to one
/// applicant. Concurrent evaluations against one instance are safe: the
/// configuration is read-only for the engine's lifetime.
pub struct HardRejectionRule {
    config: HardRuleConfig,
}

impl HardRejectionRule {
    pub fn new(config: HardRuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HardRuleConfig {
        &self.config
    }

    /// Runs the five threshold checks in fixed order without
    /// short-circuiting, appending a human-readable reason per failure.
    pub fn evaluate(
        &self,
        kpis: &UnderwritingKpis,
        metrics: &LoanMetrics,
        fraud: &FraudSignals,
    ) -> RuleResult {
        let mut reasons = Vec::new();

        if metrics.fico_mid < self.config.min_fico {
            reasons.push(format!("FICO below {}", self.config.min_fico));
        }
        if kpis.back_end_dti > self.config.max_dti {
            reasons.push(format!("DTI>{:.0}%", self.config.max_dti * 100.0));
        }
        if kpis.ltv > self.config.max_ltv {
            reasons.push(format!("LTV>{:.0}%", self.config.max_ltv * 100.0));
        }
        if kpis.reserve_months < self.config.min_reserves {
            reasons.push(format!("Reserves<{} months", self.config.min_reserves));
        }
        if fraud.score >= self.config.fraud_fail_score {
            reasons.push("High fraud risk".to_string());
        }

        tracing::debug!(
            passed = reasons.is_empty(),
            reason_count = reasons.len(),
            "hard rejection battery evaluated"
        );

        RuleResult {
            passed: reasons.is_empty(),
            reasons,
        }
    }
}
