// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{GenResult, GenerateError};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}

/// First day of the month after `year`-`month`, rolling December into January.
pub fn next_month_start(year: i32, month: u32) -> GenResult<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).ok_or(GenerateError::InvalidMonth { year, month })
}

pub fn month_end(year: i32, month: u32) -> GenResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(GenerateError::InvalidMonth { year, month });
    }
    next_month_start(year, month)?
        .pred_opt()
        .ok_or(GenerateError::InvalidMonth { year, month })
}

pub fn days_in_month(year: i32, month: u32) -> GenResult<u32> {
    Ok(month_end(year, month)?.day())
}

pub fn ymd(year: i32, month: u32, day: u32) -> GenResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GenerateError::InvalidDate { year, month, day })
}

/// `YYYY-MM` key; fixed width so lexical order is chronological.
pub fn period_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// A v4-shaped id drawn from the caller's generator, so seeded runs repeat.
pub fn new_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

/// Uniform amount in `[min, max]` whole units, at cent precision.
pub fn money_between<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Decimal {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    Decimal::new(rng.gen_range(lo * 100..=hi * 100), 2)
}
