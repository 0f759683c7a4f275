// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-month transaction synthesis: recurring obligations on fixed days plus
//! a pool of discretionary spending up to a target volume.

use super::{CategoryMap, account_of, category_id};
use crate::error::GenResult;
use crate::models::{
    Account, AccountType, Frequency, Merchant, RecurringTransaction, Transaction, TxType,
};
use crate::reference::{EXTRA_TAGS, SPENDING_PATTERNS, SpendingPattern, vendors_for};
use crate::utils::{days_in_month, money_between, new_id, ymd};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;

pub const TRANSACTIONS_PER_MONTH: RangeInclusive<usize> = 50..=100;

const RENT_MERCHANT: &str = "Property Management Co";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecurringKind {
    Salary,
    Rent,
    Subscription,
}

fn recurring_kind(template: &RecurringTransaction) -> RecurringKind {
    if template.description.contains("Salary") {
        RecurringKind::Salary
    } else if template.description.contains("Rent") {
        RecurringKind::Rent
    } else {
        RecurringKind::Subscription
    }
}

/// All transactions for `year`-`month`, ordered by date. Same-day entries
/// keep their generation order.
pub fn generate_transactions_for_month<R: Rng + ?Sized>(
    rng: &mut R,
    year: i32,
    month: u32,
    accounts: &[Account],
    categories: &CategoryMap,
    recurring: &[RecurringTransaction],
) -> GenResult<Vec<Transaction>> {
    let target = rng.gen_range(TRANSACTIONS_PER_MONTH);
    let days = days_in_month(year, month)?;

    let mut transactions = Vec::with_capacity(target);
    for template in recurring {
        match template.frequency {
            Frequency::Monthly => {
                transactions.push(materialize_recurring(rng, year, month, template)?);
            }
        }
    }

    let checking = account_of(accounts, AccountType::Checking)?;
    let credit_card = account_of(accounts, AccountType::CreditCard)?;

    let remaining = target.saturating_sub(transactions.len());
    for _ in 0..remaining {
        let date = ymd(year, month, rng.gen_range(1..=days))?;
        let pattern = pick_pattern(rng, SPENDING_PATTERNS);
        let amount = -money_between(rng, pattern.min, pattern.max);

        let vendors = vendors_for(pattern.category);
        let vendor_name = match vendors.choose(rng) {
            Some(v) => v.name.to_string(),
            None => CompanyName().fake_with_rng::<String, _>(rng),
        };

        let account = if rng.gen_bool(0.3) {
            credit_card
        } else {
            checking
        };
        let description = describe(rng, pattern.category, &vendor_name);

        let mut tags = vec![tag_for(pattern.category)];
        if rng.gen_bool(0.3) {
            if let Some(extra) = EXTRA_TAGS.choose(rng) {
                tags.push((*extra).to_string());
            }
        }

        let location = if rng.gen_bool(0.7) {
            Some(CityName().fake_with_rng::<String, _>(rng))
        } else {
            None
        };
        let notes = if rng.gen_bool(0.2) {
            Some(Sentence(4..10).fake_with_rng::<String, _>(rng))
        } else {
            None
        };

        transactions.push(Transaction {
            id: new_id(rng),
            date,
            description,
            amount,
            category: category_id(categories, pattern.category)?,
            account: account.id,
            r#type: TxType::Debit,
            tags,
            merchant: Some(Merchant {
                name: vendor_name,
                location,
            }),
            notes,
        });
    }

    transactions.sort_by_key(|t| t.date);
    Ok(transactions)
}

fn materialize_recurring<R: Rng + ?Sized>(
    rng: &mut R,
    year: i32,
    month: u32,
    template: &RecurringTransaction,
) -> GenResult<Transaction> {
    let kind = recurring_kind(template);
    let (day, r#type, tag, merchant, note) = match kind {
        RecurringKind::Salary => (1, TxType::Credit, "salary", None, "Automatic salary deposit"),
        RecurringKind::Rent => {
            let merchant = Merchant {
                name: RENT_MERCHANT.to_string(),
                location: Some(CityName().fake_with_rng::<String, _>(rng)),
            };
            (1, TxType::Debit, "rent", Some(merchant), "Monthly rent payment")
        }
        RecurringKind::Subscription => {
            let name = template
                .description
                .split_whitespace()
                .next()
                .unwrap_or(template.description.as_str())
                .to_string();
            let merchant = Merchant {
                name,
                location: None,
            };
            (
                rng.gen_range(10..=20),
                TxType::Debit,
                "subscription",
                Some(merchant),
                "Automatic subscription payment",
            )
        }
    };

    Ok(Transaction {
        id: new_id(rng),
        date: ymd(year, month, day)?,
        description: template.description.clone(),
        amount: template.amount,
        category: template.category,
        account: template.account,
        r#type,
        tags: vec!["recurring".to_string(), tag.to_string()],
        merchant,
        notes: Some(note.to_string()),
    })
}

/// Cumulative-probability pick from one uniform draw. When the draw lands past
/// the summed probabilities the pick is uniform over `patterns`.
///
/// `patterns` must not be empty.
pub fn pick_pattern<'a, R: Rng + ?Sized>(
    rng: &mut R,
    patterns: &'a [SpendingPattern],
) -> &'a SpendingPattern {
    let roll: f64 = rng.r#gen();
    let mut cumulative = 0.0;
    for p in patterns {
        cumulative += p.probability;
        if roll <= cumulative {
            return p;
        }
    }
    &patterns[rng.gen_range(0..patterns.len())]
}

fn describe<R: Rng + ?Sized>(rng: &mut R, category: &str, vendor: &str) -> String {
    let options: Vec<String> = match category {
        "Groceries" => vec![
            format!("{} - Groceries", vendor),
            format!("{} - Food Shopping", vendor),
            vendor.to_string(),
        ],
        "Restaurants" => vec![
            vendor.to_string(),
            format!("{} - Dinner", vendor),
            format!("{} - Lunch", vendor),
        ],
        "Gas" => vec![format!("{} - Gas", vendor), format!("{} - Fuel", vendor)],
        _ => vec![vendor.to_string(), format!("{} - Purchase", vendor)],
    };
    let idx = rng.gen_range(0..options.len());
    options[idx].clone()
}

/// Lower-cased, underscore-joined category name.
pub fn tag_for(category: &str) -> String {
    category.to_lowercase().replace(' ', "_")
}
