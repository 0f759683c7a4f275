// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::GeneratorConfig;
use crate::error::{GenResult, GenerateError};
use crate::generator::{
    generate_accounts, generate_budgets, generate_categories, generate_financial_goals,
    generate_recurring_transactions, generate_transactions_for_month,
};
use crate::models::FinanceData;
use chrono::{Datelike, Duration, Months};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The (year, month) pairs to synthesize.
///
/// By default month `i` is whatever month contains `start + 30 * i` days.
/// That drifts from the calendar: over 24 steps a month can be visited twice
/// and another skipped. `calendar_months` steps through real months instead.
pub fn month_schedule(config: &GeneratorConfig) -> GenResult<Vec<(i32, u32)>> {
    let start = config.as_of.date() - Duration::days(config.lookback_days);
    (0..config.months)
        .map(|offset| {
            let date = if config.calendar_months {
                start
                    .with_day(1)
                    .and_then(|d| d.checked_add_months(Months::new(offset)))
                    .ok_or(GenerateError::InvalidMonth {
                        year: start.year(),
                        month: start.month(),
                    })?
            } else {
                start + Duration::days(config.step_days * i64::from(offset))
            };
            Ok((date.year(), date.month()))
        })
        .collect()
}

/// One step of a run, reported as it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Accounts(usize),
    Categories(usize),
    Recurring(usize),
    Month { year: i32, month: u32, count: usize },
    Budgets(usize),
    Goals(usize),
}

/// Runs every generator in order against one seeded RNG.
pub fn generate(config: &GeneratorConfig) -> GenResult<FinanceData> {
    generate_with(config, |_| {})
}

/// Same as [`generate`], calling `on_progress` after each step and after each
/// month batch. A month visited twice is reported twice.
pub fn generate_with<F: FnMut(Progress)>(
    config: &GeneratorConfig,
    mut on_progress: F,
) -> GenResult<FinanceData> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let today = config.as_of.date();

    let accounts = generate_accounts(&mut rng, config.as_of);
    on_progress(Progress::Accounts(accounts.len()));

    let (categories, category_map) = generate_categories(&mut rng)?;
    on_progress(Progress::Categories(categories.len()));

    let recurring = generate_recurring_transactions(&mut rng, &accounts, &category_map, today)?;
    on_progress(Progress::Recurring(recurring.len()));

    let mut transactions = Vec::new();
    for (year, month) in month_schedule(config)? {
        let batch = generate_transactions_for_month(
            &mut rng,
            year,
            month,
            &accounts,
            &category_map,
            &recurring,
        )?;
        tracing::debug!(year, month, count = batch.len(), "generated month");
        on_progress(Progress::Month {
            year,
            month,
            count: batch.len(),
        });
        transactions.extend(batch);
    }

    let budgets = generate_budgets(&mut rng, &category_map, &transactions)?;
    on_progress(Progress::Budgets(budgets.len()));

    let financial_goals = generate_financial_goals(&mut rng, today);
    on_progress(Progress::Goals(financial_goals.len()));

    Ok(FinanceData {
        transactions,
        accounts,
        budgets,
        categories,
        recurring_transactions: recurring,
        financial_goals,
    })
}
