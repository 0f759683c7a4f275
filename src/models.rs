// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
    CreditCard,
    Investment,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::CreditCard => "credit_card",
            AccountType::Investment => "investment",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub r#type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
    pub institution: String,
    pub credit_limit: Option<u32>, // credit cards only
    pub last_updated: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Expense,
    Income,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub r#type: CategoryKind,
    pub parent: Option<Uuid>,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Monthly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTransaction {
    pub id: Uuid,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Uuid,
    pub account: Uuid,
    pub frequency: Frequency,
    pub next_date: NaiveDate,
    pub auto_pay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Merchant {
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal, // negative = money out
    pub category: Uuid,
    pub account: Uuid,
    pub r#type: TxType,
    pub tags: Vec<String>,
    pub merchant: Option<Merchant>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_limit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining: Decimal,
    pub period: String, // YYYY-MM
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    pub status: GoalStatus,
    pub deadline: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_contribution: Decimal,
}

/// The complete generated document. Field order is the output key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinanceData {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
    pub recurring_transactions: Vec<RecurringTransaction>,
    pub financial_goals: Vec<FinancialGoal>,
}
