// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Generators for each entity in the sample document. Every function takes
//! the caller's RNG so one seed drives the whole run.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod monthly;
pub mod recurring;

use crate::error::{GenResult, GenerateError};
use crate::models::{Account, AccountType};
use std::collections::HashMap;
use uuid::Uuid;

pub use accounts::generate_accounts;
pub use budgets::generate_budgets;
pub use categories::generate_categories;
pub use goals::generate_financial_goals;
pub use monthly::generate_transactions_for_month;
pub use recurring::generate_recurring_transactions;

/// Category name to generated id.
pub type CategoryMap = HashMap<String, Uuid>;

pub fn category_id(map: &CategoryMap, name: &str) -> GenResult<Uuid> {
    map.get(name)
        .copied()
        .ok_or_else(|| GenerateError::UnknownCategory(name.to_string()))
}

pub fn account_of(accounts: &[Account], typ: AccountType) -> GenResult<&Account> {
    accounts
        .iter()
        .find(|a| a.r#type == typ)
        .ok_or(GenerateError::MissingAccount(typ))
}
