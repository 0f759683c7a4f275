// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static reference tables the generators draw from.

use crate::models::CategoryKind;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vendor {
    pub name: &'static str,
    pub kind: &'static str,
    pub category: &'static str,
}

const fn vendor(name: &'static str, kind: &'static str, category: &'static str) -> Vendor {
    Vendor {
        name,
        kind,
        category,
    }
}

pub const REAL_VENDORS: &[Vendor] = &[
    vendor("Amazon", "Online Shopping", "Shopping"),
    vendor("Target", "Retail Store", "Shopping"),
    vendor("Walmart", "Grocery Store", "Groceries"),
    vendor("Whole Foods", "Grocery Store", "Groceries"),
    vendor("Starbucks", "Coffee Shop", "Restaurants"),
    vendor("McDonald's", "Fast Food", "Restaurants"),
    vendor("Chipotle", "Restaurant", "Restaurants"),
    vendor("Shell", "Gas Station", "Gas"),
    vendor("Exxon", "Gas Station", "Gas"),
    vendor("Uber", "Ride Share", "Public Transit"),
    vendor("Lyft", "Ride Share", "Public Transit"),
    vendor("CVS Pharmacy", "Pharmacy", "Healthcare"),
    vendor("Walgreens", "Pharmacy", "Healthcare"),
    vendor("Home Depot", "Home Improvement", "Shopping"),
    vendor("Best Buy", "Electronics", "Shopping"),
];

pub const FICTIONAL_VENDORS: &[Vendor] = &[
    vendor("QuickMart", "Convenience Store", "Groceries"),
    vendor("City Diner", "Restaurant", "Restaurants"),
    vendor("TechZone", "Electronics Store", "Shopping"),
    vendor("Fashion Forward", "Clothing Store", "Shopping"),
    vendor("Green Grocers", "Grocery Store", "Groceries"),
    vendor("The Book Nook", "Bookstore", "Entertainment"),
    vendor("FitLife Gym", "Gym", "Personal Care"),
    vendor("Metro Transit", "Public Transit", "Public Transit"),
    vendor("Corner Cafe", "Coffee Shop", "Restaurants"),
    vendor("Pet Paradise", "Pet Store", "Shopping"),
];

pub static ALL_VENDORS: Lazy<Vec<Vendor>> = Lazy::new(|| {
    REAL_VENDORS
        .iter()
        .chain(FICTIONAL_VENDORS.iter())
        .copied()
        .collect()
});

/// Vendors whose category matches `category`, real ones first.
pub fn vendors_for(category: &str) -> Vec<&'static Vendor> {
    ALL_VENDORS
        .iter()
        .filter(|v| v.category == category)
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub kind: CategoryKind,
    pub parent: Option<&'static str>,
    pub icon: &'static str,
    pub color: &'static str,
}

const fn expense(
    name: &'static str,
    parent: Option<&'static str>,
    icon: &'static str,
    color: &'static str,
) -> CategorySeed {
    CategorySeed {
        name,
        kind: CategoryKind::Expense,
        parent,
        icon,
        color,
    }
}

const fn income(name: &'static str, icon: &'static str, color: &'static str) -> CategorySeed {
    CategorySeed {
        name,
        kind: CategoryKind::Income,
        parent: None,
        icon,
        color,
    }
}

// Parents must precede their children.
pub const EXPENSE_CATEGORIES: &[CategorySeed] = &[
    expense("Housing", None, "🏠", "#FF6B6B"),
    expense("Rent", Some("Housing"), "🏘️", "#FF8787"),
    expense("Utilities", Some("Housing"), "💡", "#FFA3A3"),
    expense("Food & Dining", None, "🍽️", "#4ECDC4"),
    expense("Groceries", Some("Food & Dining"), "🛒", "#6EDCD4"),
    expense("Restaurants", Some("Food & Dining"), "🍕", "#8EEDE4"),
    expense("Transportation", None, "🚗", "#95E1D3"),
    expense("Gas", Some("Transportation"), "⛽", "#A5E9D9"),
    expense("Public Transit", Some("Transportation"), "🚇", "#B5F1DF"),
    expense("Shopping", None, "🛍️", "#F38181"),
    expense("Entertainment", None, "🎬", "#AA96DA"),
    expense("Healthcare", None, "🏥", "#FCBAD3"),
    expense("Bills & Utilities", None, "📄", "#FFD93D"),
    expense("Personal Care", None, "💅", "#C7CEEA"),
    expense("Education", None, "📚", "#FFB6C1"),
];

pub const INCOME_CATEGORIES: &[CategorySeed] = &[
    income("Salary", "💰", "#6BCB77"),
    income("Freelance", "💼", "#7BDB87"),
    income("Investment Returns", "📈", "#8BEB97"),
];

/// Discretionary spending profile for one category. Amounts are whole
/// currency units; `probability` is the share of the cumulative draw.
#[derive(Debug, Clone, Copy)]
pub struct SpendingPattern {
    pub category: &'static str,
    pub min: i64,
    pub max: i64,
    pub probability: f64,
}

const fn pattern(category: &'static str, min: i64, max: i64, probability: f64) -> SpendingPattern {
    SpendingPattern {
        category,
        min,
        max,
        probability,
    }
}

// Probabilities need not sum to 1; a draw past their sum falls back to a
// uniform pick.
pub const SPENDING_PATTERNS: &[SpendingPattern] = &[
    pattern("Groceries", 30, 150, 0.15),
    pattern("Restaurants", 15, 80, 0.20),
    pattern("Gas", 30, 60, 0.10),
    pattern("Shopping", 20, 200, 0.15),
    pattern("Entertainment", 10, 100, 0.10),
    pattern("Healthcare", 20, 300, 0.05),
    pattern("Bills & Utilities", 50, 200, 0.08),
    pattern("Personal Care", 15, 100, 0.07),
    pattern("Public Transit", 5, 50, 0.10),
];

pub const BUDGET_CATEGORIES: &[&str] = &[
    "Groceries",
    "Restaurants",
    "Shopping",
    "Entertainment",
    "Transportation",
];

pub const EXTRA_TAGS: &[&str] = &["business", "personal", "family", "urgent"];

pub const CREDIT_LIMITS: &[u32] = &[5000, 10000, 15000, 20000];

pub const CURRENCY: &str = "USD";
