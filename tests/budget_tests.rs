// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneyseed::generator::budgets::monthly_spending;
use moneyseed::generator::{CategoryMap, generate_budgets, generate_categories};
use moneyseed::models::{Transaction, TxType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

fn categories() -> CategoryMap {
    let mut rng = StdRng::seed_from_u64(42);
    generate_categories(&mut rng).unwrap().1
}

fn txn(date: &str, amount: &str, category: Uuid) -> Transaction {
    let amount = Decimal::from_str(amount).unwrap();
    Transaction {
        id: Uuid::nil(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: "test".into(),
        amount,
        category,
        account: Uuid::nil(),
        r#type: if amount < Decimal::ZERO {
            TxType::Debit
        } else {
            TxType::Credit
        },
        tags: vec![],
        merchant: None,
        notes: None,
    }
}

#[test]
fn spend_sums_only_expenses_per_month() {
    let map = categories();
    let groceries = map["Groceries"];
    let txns = vec![
        txn("2024-01-03", "-10.25", groceries),
        txn("2024-01-20", "-4.75", groceries),
        txn("2024-01-21", "100.00", groceries),
        txn("2024-02-01", "-1.00", groceries),
    ];
    let spending = monthly_spending(&txns);
    assert_eq!(spending.keys().collect::<Vec<_>>(), ["2024-01", "2024-02"]);
    assert_eq!(spending["2024-01"][&groceries], Decimal::from_str("15.00").unwrap());
    assert_eq!(spending["2024-02"][&groceries], Decimal::from_str("1.00").unwrap());
}

#[test]
fn one_budget_per_tracked_category_and_month() {
    let map = categories();
    let txns = vec![
        txn("2024-03-05", "-42.10", map["Restaurants"]),
        txn("2024-01-05", "-12.00", map["Groceries"]),
        txn("2024-02-05", "-80.00", map["Shopping"]),
    ];
    let mut rng = StdRng::seed_from_u64(1);
    let budgets = generate_budgets(&mut rng, &map, &txns).unwrap();
    assert_eq!(budgets.len(), 3 * 5);

    let periods: Vec<_> = budgets.iter().map(|b| b.period.as_str()).collect();
    let mut sorted = periods.clone();
    sorted.sort();
    assert_eq!(periods, sorted);

    for b in &budgets {
        assert!(b.monthly_limit >= b.spent);
        assert_eq!(b.remaining, b.monthly_limit - b.spent);
        assert!(b.remaining >= Decimal::ZERO);
        if b.spent > Decimal::ZERO {
            assert!(b.monthly_limit >= (b.spent * Decimal::new(11, 1)).round_dp(2));
            assert!(b.monthly_limit <= (b.spent * Decimal::new(15, 1)).round_dp(2));
        }
    }
}

#[test]
fn untouched_transportation_still_gets_a_zero_budget() {
    let map = categories();
    let txns = vec![
        txn("2024-04-10", "-55.00", map["Groceries"]),
        // Gas is a child of Transportation but does not roll up
        txn("2024-04-11", "-40.00", map["Gas"]),
    ];
    let mut rng = StdRng::seed_from_u64(2);
    let budgets = generate_budgets(&mut rng, &map, &txns).unwrap();
    let transport = budgets
        .iter()
        .find(|b| b.category == map["Transportation"] && b.period == "2024-04")
        .unwrap();
    assert_eq!(transport.spent, Decimal::ZERO);
    assert_eq!(transport.monthly_limit, Decimal::ZERO);
    assert_eq!(transport.remaining, Decimal::ZERO);
}

#[test]
fn income_only_months_produce_no_budgets() {
    let map = categories();
    let txns = vec![txn("2024-05-01", "6000.00", map["Salary"])];
    let mut rng = StdRng::seed_from_u64(3);
    assert!(generate_budgets(&mut rng, &map, &txns).unwrap().is_empty());
}

#[test]
fn rerunning_keeps_spend_figures() {
    let map = categories();
    let txns = vec![
        txn("2024-06-02", "-19.99", map["Entertainment"]),
        txn("2024-06-09", "-5.01", map["Entertainment"]),
    ];
    let first = generate_budgets(&mut StdRng::seed_from_u64(10), &map, &txns).unwrap();
    let second = generate_budgets(&mut StdRng::seed_from_u64(99), &map, &txns).unwrap();
    let spent = |v: &[moneyseed::models::Budget]| v.iter().map(|b| b.spent).collect::<Vec<_>>();
    assert_eq!(spent(&first), spent(&second));

    let again = generate_budgets(&mut StdRng::seed_from_u64(10), &map, &txns).unwrap();
    assert_eq!(
        first.iter().map(|b| b.monthly_limit).collect::<Vec<_>>(),
        again.iter().map(|b| b.monthly_limit).collect::<Vec<_>>()
    );
}
