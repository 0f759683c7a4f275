// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, AccountType};
use crate::reference::{CREDIT_LIMITS, CURRENCY};
use crate::utils::{money_between, new_id};
use chrono::NaiveDateTime;
use rand::Rng;
use rand::seq::SliceRandom;

struct Template {
    name: &'static str,
    typ: AccountType,
    institution: &'static str,
    min: i64,
    max: i64,
}

const TEMPLATES: &[Template] = &[
    Template {
        name: "Primary Checking",
        typ: AccountType::Checking,
        institution: "Chase Bank",
        min: 2_000,
        max: 10_000,
    },
    Template {
        name: "Savings Account",
        typ: AccountType::Savings,
        institution: "Chase Bank",
        min: 10_000,
        max: 50_000,
    },
    Template {
        name: "Credit Card",
        typ: AccountType::CreditCard,
        institution: "Capital One",
        min: -5_000,
        max: -500,
    },
    Template {
        name: "Investment Account",
        typ: AccountType::Investment,
        institution: "Fidelity",
        min: 50_000,
        max: 200_000,
    },
];

/// One account per type with a balance drawn from the type's range.
pub fn generate_accounts<R: Rng + ?Sized>(rng: &mut R, as_of: NaiveDateTime) -> Vec<Account> {
    TEMPLATES
        .iter()
        .map(|t| {
            let id = new_id(rng);
            let balance = money_between(rng, t.min, t.max);
            let credit_limit = if t.typ == AccountType::CreditCard {
                CREDIT_LIMITS.choose(rng).copied()
            } else {
                None
            };
            Account {
                id,
                name: t.name.to_string(),
                r#type: t.typ,
                balance,
                currency: CURRENCY.to_string(),
                institution: t.institution.to_string(),
                credit_limit,
                last_updated: as_of,
            }
        })
        .collect()
}
