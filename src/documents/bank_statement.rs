use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::{parse_amount, round2, round4};

/// Transaction dates arrive as e.g. "01 Jan 2024".
const TRANSACTION_DATE_FORMAT: &str = "%d %b %Y";
/// Daily balance series are keyed by ISO date.
const BALANCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Single row of a statement's transaction table, still in raw text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Raw bank statement record as produced by the ingestion collaborator.
/// Absent tables deserialize to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankStatement {
    #[serde(default)]
    pub transactions_table: Vec<Transaction>,
}

/// Monthly cash-flow KPIs. `None` always means "insufficient data", never
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankKpis {
    pub average_monthly_transaction_count: Option<f64>,
    pub monthly_average_debit: Option<f64>,
    pub monthly_average_credit: Option<f64>,
    pub average_monthly_debit_credit_ratio: Option<f64>,
    pub average_monthly_balance: Option<f64>,
}

/// Cash-flow accumulator for one calendar month, rebuilt per extraction call.
#[derive(Debug, Clone, Default, PartialEq)]
struct MonthlyAggregate {
    count: u32,
    debits: f64,
    credits: f64,
}

/// Aggregates a statement's transactions into monthly cash-flow KPIs.
///
/// The average balance uses the first available strategy: observed daily
/// balances, else a projection from `opening_balance`, else `None`. Both
/// strategies reduce to an average of monthly averages, so sparse months are
/// not down-weighted.
pub fn calculate_bank_kpis(
    statement: &BankStatement,
    daily_balances: Option<&BTreeMap<String, f64>>,
    opening_balance: Option<f64>,
) -> BankKpis {
    let transactions = &statement.transactions_table;
    if transactions.is_empty() {
        return BankKpis::default();
    }

    let mut monthly: BTreeMap<String, MonthlyAggregate> = BTreeMap::new();
    for transaction in transactions {
        let Some((date, amount)) = parse_transaction(transaction) else {
            continue;
        };
        let aggregate = monthly.entry(month_key(date)).or_default();
        aggregate.count += 1;
        if is_debit(transaction) {
            aggregate.debits += amount;
        } else {
            aggregate.credits += amount;
        }
    }

    let month_count = monthly.len() as f64;
    let average_count = safe_div(monthly.values().map(|m| f64::from(m.count)).sum(), month_count);
    let average_debit = safe_div(monthly.values().map(|m| m.debits).sum(), month_count);
    let average_credit = safe_div(monthly.values().map(|m| m.credits).sum(), month_count);

    let ratio = match (average_debit, average_credit) {
        (Some(debit), Some(credit)) => safe_div(debit, credit),
        _ => None,
    };

    // An empty series carries no observations; fall through to projection.
    let observed = daily_balances.filter(|balances| !balances.is_empty());
    let balance = if let Some(balances) = observed {
        observed_monthly_balance(balances)
    } else if let Some(opening) = opening_balance {
        projected_monthly_balance(transactions, opening)
    } else {
        None
    };

    BankKpis {
        average_monthly_transaction_count: average_count.map(round2),
        monthly_average_debit: average_debit.map(round2),
        monthly_average_credit: average_credit.map(round2),
        average_monthly_debit_credit_ratio: ratio.map(round4),
        average_monthly_balance: balance.map(round2),
    }
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn is_debit(transaction: &Transaction) -> bool {
    transaction.kind.eq_ignore_ascii_case("debit")
}

fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

fn parse_transaction(transaction: &Transaction) -> Option<(NaiveDate, f64)> {
    let date = NaiveDate::parse_from_str(transaction.date.trim(), TRANSACTION_DATE_FORMAT).ok();
    let amount = parse_amount(&transaction.amount).ok();
    match (date, amount) {
        (Some(date), Some(amount)) => Some((date, amount)),
        _ => {
            tracing::debug!(
                date = %transaction.date,
                amount = %transaction.amount,
                "skipping unparseable transaction"
            );
            None
        }
    }
}

/// Strategy (a): average each month's observed balances, then average the
/// monthly averages.
fn observed_monthly_balance(daily_balances: &BTreeMap<String, f64>) -> Option<f64> {
    let mut monthly: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (day, balance) in daily_balances {
        let Ok(date) = NaiveDate::parse_from_str(day.trim(), BALANCE_DATE_FORMAT) else {
            tracing::debug!(day = %day, "skipping daily balance with unparseable date");
            continue;
        };
        monthly.entry(month_key(date)).or_default().push(*balance);
    }
    average_of_monthly_averages(&monthly)
}

/// Strategy (b): accumulate a running balance from the opening balance over
/// each day's signed net, then reduce like strategy (a).
fn projected_monthly_balance(transactions: &[Transaction], opening_balance: f64) -> Option<f64> {
    let mut daily_net: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for transaction in transactions {
        let Some((date, amount)) = parse_transaction(transaction) else {
            continue;
        };
        let signed = if is_debit(transaction) { -amount } else { amount };
        *daily_net.entry(date).or_insert(0.0) += signed;
    }

    if daily_net.is_empty() {
        return None;
    }

    let mut balance = opening_balance;
    let mut monthly: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    // BTreeMap iteration walks dates in ascending order.
    for (date, net) in &daily_net {
        balance += net;
        monthly.entry(month_key(*date)).or_default().push(balance);
    }
    average_of_monthly_averages(&monthly)
}

fn average_of_monthly_averages(monthly: &BTreeMap<String, Vec<f64>>) -> Option<f64> {
    if monthly.is_empty() {
        return None;
    }
    let total: f64 = monthly
        .values()
        .map(|balances| balances.iter().sum::<f64>() / balances.len() as f64)
        .sum();
    Some(total / monthly.len() as f64)
}
