// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FinancialGoal, GoalStatus};
use crate::utils::{money_between, new_id};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

/// Four savings goals, independent of the ledger.
pub fn generate_financial_goals<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Vec<FinancialGoal> {
    let mut goals = Vec::with_capacity(4);

    let id = new_id(rng);
    let current_amount = money_between(rng, 3_000, 8_000);
    // one in four emergency funds is already done
    let status = if rng.gen_range(0..4) == 3 {
        GoalStatus::Completed
    } else {
        GoalStatus::InProgress
    };
    goals.push(FinancialGoal {
        id,
        name: "Emergency Fund".to_string(),
        target_amount: Decimal::new(10_000, 0),
        current_amount,
        status,
        deadline: today + Duration::days(365),
        monthly_contribution: money_between(rng, 200, 500),
    });

    let ranged = [
        ("Vacation Fund", (3_000, 5_000), (500, 2_000), (200, 400), 180),
        ("New Car Down Payment", (5_000, 10_000), (1_000, 4_000), (300, 600), 730),
        ("Home Down Payment", (50_000, 100_000), (10_000, 30_000), (1_000, 2_000), 1825),
    ];
    for (name, target, current, contribution, days) in ranged {
        goals.push(FinancialGoal {
            id: new_id(rng),
            name: name.to_string(),
            target_amount: money_between(rng, target.0, target.1),
            current_amount: money_between(rng, current.0, current.1),
            status: GoalStatus::InProgress,
            deadline: today + Duration::days(days),
            monthly_contribution: money_between(rng, contribution.0, contribution.1),
        });
    }
    goals
}
