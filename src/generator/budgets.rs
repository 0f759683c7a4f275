// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{CategoryMap, category_id};
use crate::error::GenResult;
use crate::models::{Budget, Transaction};
use crate::reference::BUDGET_CATEGORIES;
use crate::utils::{new_id, period_key};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Absolute expense per period per category. Only negative amounts count.
pub fn monthly_spending(transactions: &[Transaction]) -> BTreeMap<String, HashMap<Uuid, Decimal>> {
    let mut spending: BTreeMap<String, HashMap<Uuid, Decimal>> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.amount < Decimal::ZERO) {
        *spending
            .entry(period_key(t.date))
            .or_default()
            .entry(t.category)
            .or_insert(Decimal::ZERO) += t.amount.abs();
    }
    spending
}

/// One budget per (period with expenses, tracked category), oldest period
/// first. The limit is spend scaled by a draw from [1.1, 1.5], so a category
/// with no spend gets a zero limit.
pub fn generate_budgets<R: Rng + ?Sized>(
    rng: &mut R,
    categories: &CategoryMap,
    transactions: &[Transaction],
) -> GenResult<Vec<Budget>> {
    let tracked = BUDGET_CATEGORIES
        .iter()
        .map(|name| category_id(categories, name))
        .collect::<GenResult<Vec<Uuid>>>()?;

    let spending = monthly_spending(transactions);
    let mut budgets = Vec::with_capacity(spending.len() * tracked.len());
    for (period, by_category) in &spending {
        for cat in &tracked {
            let spent = by_category
                .get(cat)
                .copied()
                .unwrap_or(Decimal::ZERO)
                .round_dp(2);
            let multiplier = Decimal::new(rng.gen_range(11_000..=15_000), 4);
            let monthly_limit = (spent * multiplier).round_dp(2);
            budgets.push(Budget {
                id: new_id(rng),
                category: *cat,
                monthly_limit,
                spent,
                remaining: monthly_limit - spent,
                period: period.clone(),
            });
        }
    }
    Ok(budgets)
}
