//! Deterministic KPI extraction for loan-applicant documents plus the
//! hard-rejection rule battery that consumes the aggregated metrics.
//!
//! Every extractor is a pure function over already-parsed document fields:
//! malformed or absent values degrade to `None` ("could not compute"), never
//! to zero, so downstream consumers can always tell an empty account from a
//! missing statement. Ingestion, persistence, and transport surfaces live in
//! external collaborators.

pub mod documents;
pub mod normalize;
pub mod underwriting;

pub use documents::{
    calculate_bank_kpis, calculate_credit_report_kpis, calculate_identity_kpis,
    calculate_identity_kpis_at, calculate_paystub_kpis, infer_frequency, BankKpis, BankStatement,
    CreditHealth, CreditKpis, CreditReportFields, DocumentVerificationStatus, IdentityDocument,
    IdentityKpis, PayFrequency, PaystubFields, SalaryKpis, Transaction,
};
pub use underwriting::{
    FraudSignals, HardRejectionRule, HardRuleConfig, LoanMetrics, RuleResult, UnderwritingKpis,
};
