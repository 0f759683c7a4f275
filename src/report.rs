// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Post-hoc validation and summary statistics for a generated document.

use crate::generator::monthly::TRANSACTIONS_PER_MONTH;
use crate::models::FinanceData;
use crate::utils::{period_key, pretty_table};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

pub const REQUIRED_TRANSACTION_FIELDS: &[&str] = &[
    "id",
    "date",
    "description",
    "amount",
    "category",
    "account",
    "type",
];

/// Required fields that are absent or null on one transaction object.
pub fn missing_fields(txn: &Value) -> Vec<&'static str> {
    REQUIRED_TRANSACTION_FIELDS
        .iter()
        .copied()
        .filter(|f| txn.get(*f).is_none_or(Value::is_null))
        .collect()
}

/// Number of entries under `transactions` missing at least one required field.
pub fn count_invalid_transactions(doc: &Value) -> usize {
    doc.get("transactions")
        .and_then(Value::as_array)
        .map(|txns| txns.iter().filter(|t| !missing_fields(t).is_empty()).count())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub transactions: usize,
    pub accounts: usize,
    pub budgets: usize,
    pub categories: usize,
    pub recurring_transactions: usize,
    pub financial_goals: usize,
    pub invalid_transactions: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub per_month: BTreeMap<String, usize>,
}

impl Summary {
    pub fn new(data: &FinanceData, invalid_transactions: usize) -> Self {
        let mut per_month = BTreeMap::new();
        for t in &data.transactions {
            *per_month.entry(period_key(t.date)).or_insert(0) += 1;
        }
        Summary {
            transactions: data.transactions.len(),
            accounts: data.accounts.len(),
            budgets: data.budgets.len(),
            categories: data.categories.len(),
            recurring_transactions: data.recurring_transactions.len(),
            financial_goals: data.financial_goals.len(),
            invalid_transactions,
            first_date: data.transactions.iter().map(|t| t.date).min(),
            last_date: data.transactions.iter().map(|t| t.date).max(),
            per_month,
        }
    }

    /// Periods whose volume falls outside the per-month target range. Under
    /// 30-day stepping a period visited twice shows up here.
    pub fn out_of_range_months(&self) -> Vec<(String, usize)> {
        self.per_month
            .iter()
            .filter(|(_, n)| !TRANSACTIONS_PER_MONTH.contains(*n))
            .map(|(m, n)| (m.clone(), *n))
            .collect()
    }
}

pub fn print_summary(s: &Summary) {
    if s.invalid_transactions > 0 {
        tracing::warn!(count = s.invalid_transactions, "invalid transactions found");
        println!("⚠ Warning: {} invalid transactions found", s.invalid_transactions);
    } else {
        println!("✓ All transactions are valid");
    }
    if let (Some(first), Some(last)) = (s.first_date, s.last_date) {
        println!("✓ Date range: {} to {}", first, last);
    }

    let rows = s
        .per_month
        .iter()
        .map(|(m, n)| {
            let flag = if TRANSACTIONS_PER_MONTH.contains(n) {
                String::new()
            } else {
                format!(
                    "expected {}-{}",
                    TRANSACTIONS_PER_MONTH.start(),
                    TRANSACTIONS_PER_MONTH.end()
                )
            };
            vec![m.clone(), n.to_string(), flag]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Transactions", "Warning"], rows));
    for (m, n) in s.out_of_range_months() {
        tracing::warn!(month = %m, count = n, "month volume outside expected range");
    }

    let counts = vec![
        vec!["Transactions".to_string(), s.transactions.to_string()],
        vec!["Accounts".to_string(), s.accounts.to_string()],
        vec!["Budgets".to_string(), s.budgets.to_string()],
        vec!["Categories".to_string(), s.categories.to_string()],
        vec![
            "Recurring Transactions".to_string(),
            s.recurring_transactions.to_string(),
        ],
        vec!["Financial Goals".to_string(), s.financial_goals.to_string()],
    ];
    println!("{}", pretty_table(&["Entity", "Count"], counts));
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

impl Issue {
    fn new(kind: &'static str, detail: String) -> Self {
        Issue { kind, detail }
    }
}

/// Required-field gaps, read from the raw document so absent keys are visible.
pub fn field_issues(doc: &Value) -> Vec<Issue> {
    let Some(txns) = doc.get("transactions").and_then(Value::as_array) else {
        return vec![Issue::new("missing_section", "transactions".to_string())];
    };
    txns.iter()
        .enumerate()
        .filter_map(|(i, t)| {
            let missing = missing_fields(t);
            if missing.is_empty() {
                None
            } else {
                Some(Issue::new(
                    "missing_fields",
                    format!("transaction #{}: {}", i, missing.join(", ")),
                ))
            }
        })
        .collect()
}

/// Referential and arithmetic checks over a parsed document.
pub fn consistency_issues(data: &FinanceData) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut seen: HashSet<Uuid> = HashSet::new();
    for c in &data.categories {
        if let Some(parent) = c.parent {
            if !seen.contains(&parent) {
                issues.push(Issue::new(
                    "parent_out_of_order",
                    format!("{} -> {}", c.name, parent),
                ));
            }
        }
        seen.insert(c.id);
    }
    let categories = seen;
    let accounts: HashSet<Uuid> = data.accounts.iter().map(|a| a.id).collect();

    for t in &data.transactions {
        if !categories.contains(&t.category) {
            issues.push(Issue::new(
                "dangling_category",
                format!("transaction {} ({})", t.id, t.date),
            ));
        }
        if !accounts.contains(&t.account) {
            issues.push(Issue::new(
                "dangling_account",
                format!("transaction {} ({})", t.id, t.date),
            ));
        }
    }
    for r in &data.recurring_transactions {
        if !categories.contains(&r.category) || !accounts.contains(&r.account) {
            issues.push(Issue::new("dangling_reference", r.description.clone()));
        }
    }

    for b in &data.budgets {
        if !categories.contains(&b.category) {
            issues.push(Issue::new(
                "dangling_category",
                format!("budget {} ({})", b.id, b.period),
            ));
        }
        if b.monthly_limit < b.spent {
            issues.push(Issue::new(
                "budget_over_limit",
                format!("{}: spent {} > limit {}", b.period, b.spent, b.monthly_limit),
            ));
        }
        if (b.monthly_limit - b.spent).round_dp(2) != b.remaining.round_dp(2) {
            issues.push(Issue::new(
                "budget_remaining_mismatch",
                format!(
                    "{}: {} - {} != {}",
                    b.period, b.monthly_limit, b.spent, b.remaining
                ),
            ));
        }
    }

    for (m, n) in Summary::new(data, 0).out_of_range_months() {
        issues.push(Issue::new("month_volume", format!("{}: {} transactions", m, n)));
    }
    issues
}
