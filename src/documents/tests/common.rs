use std::collections::BTreeMap;

use crate::documents::bank_statement::{BankStatement, Transaction};
use crate::documents::credit_report::CreditReportFields;
use crate::documents::identity::IdentityDocument;

pub(super) fn transaction(date: &str, amount: &str, kind: &str) -> Transaction {
    Transaction {
        date: date.to_string(),
        amount: amount.to_string(),
        kind: kind.to_string(),
    }
}

pub(super) fn statement(transactions: Vec<Transaction>) -> BankStatement {
    BankStatement {
        transactions_table: transactions,
    }
}

pub(super) fn daily_balances(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(day, balance)| (day.to_string(), *balance))
        .collect()
}

pub(super) fn credit_report(
    credit_score: Option<&str>,
    monthly_debt_payments: Option<&str>,
) -> CreditReportFields {
    CreditReportFields {
        credit_score: credit_score.map(str::to_string),
        monthly_debt_payments: monthly_debt_payments.map(str::to_string),
        ..CreditReportFields::default()
    }
}

pub(super) fn identity_document(
    date_of_birth: Option<&str>,
    expiry_date: Option<&str>,
) -> IdentityDocument {
    IdentityDocument {
        full_name: Some("Jane Q Applicant".to_string()),
        date_of_birth: date_of_birth.map(str::to_string),
        expiry_date: expiry_date.map(str::to_string),
        ..IdentityDocument::default()
    }
}
