//! Per-document KPI extractors. Each extractor is a pure transform from a
//! raw field record to a complete KPI record; fields that cannot be computed
//! come back as `None` rather than aborting the whole extraction.

pub mod bank_statement;
pub mod credit_report;
pub mod identity;
pub mod salary;

#[cfg(test)]
mod tests;

pub use bank_statement::{calculate_bank_kpis, BankKpis, BankStatement, Transaction};
pub use credit_report::{
    calculate_credit_report_kpis, detect_bankruptcy, detect_delinquencies, CreditHealth,
    CreditKpis, CreditReportFields,
};
pub use identity::{
    calculate_age, calculate_age_at, calculate_identity_kpis, calculate_identity_kpis_at,
    days_until_expiry, days_until_expiry_at, is_document_valid, is_document_valid_at,
    name_match_score, normalize_name, DocumentVerificationStatus, IdentityDocument, IdentityKpis,
};
pub use salary::{calculate_paystub_kpis, infer_frequency, PayFrequency, PaystubFields, SalaryKpis};
