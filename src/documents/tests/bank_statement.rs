use super::common::*;
use crate::documents::bank_statement::{calculate_bank_kpis, BankKpis, BankStatement};

#[test]
fn empty_statement_yields_all_unknown_fields() {
    let kpis = calculate_bank_kpis(&BankStatement::default(), None, None);

    assert_eq!(kpis, BankKpis::default());
    assert_eq!(kpis.average_monthly_transaction_count, None);
    assert_eq!(kpis.average_monthly_balance, None);
}

#[test]
fn aggregates_transactions_by_calendar_month() {
    let statement = statement(vec![
        transaction("05 Jan 2024", "1,000.00", "credit"),
        transaction("10 Jan 2024", "$200.50", "debit"),
        transaction("15 Feb 2024", "300", "DEBIT"),
        transaction("20 Feb 2024", "150", "credit"),
    ]);

    let kpis = calculate_bank_kpis(&statement, None, None);

    // Two distinct months; average count times month count recovers the total.
    assert_eq!(kpis.average_monthly_transaction_count, Some(2.0));
    assert_eq!(kpis.monthly_average_debit, Some(250.25));
    assert_eq!(kpis.monthly_average_credit, Some(575.0));
    assert_eq!(kpis.average_monthly_debit_credit_ratio, Some(0.4352));
}

#[test]
fn non_debit_types_are_treated_as_credit() {
    let statement = statement(vec![
        transaction("05 Jan 2024", "100", "transfer"),
        transaction("06 Jan 2024", "50", "Credit"),
    ]);

    let kpis = calculate_bank_kpis(&statement, None, None);

    assert_eq!(kpis.monthly_average_debit, Some(0.0));
    assert_eq!(kpis.monthly_average_credit, Some(150.0));
}

#[test]
fn ratio_is_unknown_when_average_credit_is_zero() {
    let statement = statement(vec![
        transaction("05 Jan 2024", "100", "debit"),
        transaction("06 Jan 2024", "40", "debit"),
    ]);

    let kpis = calculate_bank_kpis(&statement, None, None);

    // A zero credit average is a valid datum; only the ratio degrades.
    assert_eq!(kpis.monthly_average_credit, Some(0.0));
    assert_eq!(kpis.average_monthly_debit_credit_ratio, None);
}

#[test]
fn unparseable_transactions_are_skipped() {
    let statement = statement(vec![
        transaction("05 Jan 2024", "100", "credit"),
        transaction("not a date", "100", "credit"),
        transaction("06 Jan 2024", "one hundred", "credit"),
    ]);

    let kpis = calculate_bank_kpis(&statement, None, None);

    assert_eq!(kpis.average_monthly_transaction_count, Some(1.0));
    assert_eq!(kpis.monthly_average_credit, Some(100.0));
}

#[test]
fn observed_balances_average_monthly_averages() {
    let statement = statement(vec![transaction("05 Jan 2024", "10", "credit")]);
    let balances = daily_balances(&[
        ("2024-01-05", 100.0),
        ("2024-01-20", 300.0),
        ("2024-02-10", 200.0),
    ]);

    let kpis = calculate_bank_kpis(&statement, Some(&balances), None);

    // January averages 200, February 200; months weigh equally.
    assert_eq!(kpis.average_monthly_balance, Some(200.0));
}

#[test]
fn projects_running_balance_from_opening_balance() {
    let statement = statement(vec![
        transaction("01 Jan 2024", "500", "credit"),
        transaction("02 Jan 2024", "200", "debit"),
    ]);

    let kpis = calculate_bank_kpis(&statement, None, Some(1000.0));

    // Running balances are 1500 then 1300.
    assert_eq!(kpis.average_monthly_balance, Some(1400.0));
}

#[test]
fn observed_balances_take_priority_over_opening_balance() {
    let statement = statement(vec![transaction("05 Jan 2024", "500", "credit")]);
    let balances = daily_balances(&[("2024-01-05", 250.0)]);

    let kpis = calculate_bank_kpis(&statement, Some(&balances), Some(1000.0));

    assert_eq!(kpis.average_monthly_balance, Some(250.0));
}

#[test]
fn empty_balance_series_falls_back_to_opening_balance_projection() {
    let statement = statement(vec![
        transaction("01 Jan 2024", "500", "credit"),
        transaction("02 Jan 2024", "200", "debit"),
    ]);
    let balances = daily_balances(&[]);

    let kpis = calculate_bank_kpis(&statement, Some(&balances), Some(1000.0));

    assert_eq!(kpis.average_monthly_balance, Some(1400.0));

    let no_opening = calculate_bank_kpis(&statement, Some(&balances), None);
    assert_eq!(no_opening.average_monthly_balance, None);
}

#[test]
fn balance_is_unknown_without_either_input() {
    let statement = statement(vec![transaction("05 Jan 2024", "500", "credit")]);

    let kpis = calculate_bank_kpis(&statement, None, None);

    assert_eq!(kpis.average_monthly_balance, None);
}

#[test]
fn statement_deserializes_with_absent_transaction_table() {
    let statement: BankStatement = serde_json::from_value(serde_json::json!({}))
        .expect("absent table is a valid statement");

    assert!(statement.transactions_table.is_empty());
}
