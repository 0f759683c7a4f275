// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{CategoryMap, account_of, category_id};
use crate::error::GenResult;
use crate::models::{Account, AccountType, Frequency, RecurringTransaction};
use crate::utils::{money_between, new_id};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

/// Salary, rent, two subscriptions and a gym membership, all on checking.
/// `next_date` is the day after `today`.
pub fn generate_recurring_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    accounts: &[Account],
    categories: &CategoryMap,
    today: NaiveDate,
) -> GenResult<Vec<RecurringTransaction>> {
    let checking = account_of(accounts, AccountType::Checking)?.id;
    let next_date = today + Duration::days(1);

    let templates: [(&str, Decimal, &str, bool); 5] = [
        ("Monthly Salary", money_between(rng, 5_000, 8_000), "Salary", false),
        ("Rent Payment", -money_between(rng, 1_200, 2_500), "Rent", true),
        ("Netflix Subscription", Decimal::new(-1599, 2), "Entertainment", true),
        ("Spotify Premium", Decimal::new(-999, 2), "Entertainment", true),
        ("Gym Membership", -money_between(rng, 30, 80), "Personal Care", true),
    ];

    templates
        .into_iter()
        .map(|(description, amount, category, auto_pay)| {
            Ok(RecurringTransaction {
                id: new_id(rng),
                description: description.to_string(),
                amount,
                category: category_id(categories, category)?,
                account: checking,
                frequency: Frequency::Monthly,
                next_date,
                auto_pay,
            })
        })
        .collect()
}
