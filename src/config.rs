// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::parse_date;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "generated_finance_data.json";
pub const DEFAULT_SCHEMA: &str = "schema.json";

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Number of months to synthesize.
    pub months: u32,
    /// How far before `as_of` the first month starts.
    pub lookback_days: i64,
    /// Day offset between consecutive months when not using calendar steps.
    pub step_days: i64,
    /// Step by calendar month instead of `step_days`.
    pub calendar_months: bool,
    /// Run timestamp; drives the window, deadlines and `last_updated`.
    /// Defaults to local midnight so same-day runs with one seed repeat.
    pub as_of: NaiveDateTime,
    pub output: PathBuf,
    pub schema: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            months: 24,
            lookback_days: 730,
            step_days: 30,
            calendar_months: false,
            as_of: Local::now().date_naive().and_time(NaiveTime::MIN),
            output: PathBuf::from(DEFAULT_OUTPUT),
            schema: PathBuf::from(DEFAULT_SCHEMA),
        }
    }
}

impl GeneratorConfig {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let mut cfg = GeneratorConfig::default();
        if let Some(seed) = m.get_one::<u64>("seed") {
            cfg.seed = *seed;
        }
        if let Some(months) = m.get_one::<u32>("months") {
            cfg.months = *months;
        }
        if let Some(out) = m.get_one::<String>("out") {
            cfg.output = PathBuf::from(out.trim());
        }
        if let Some(schema) = m.get_one::<String>("schema") {
            cfg.schema = PathBuf::from(schema.trim());
        }
        if let Some(as_of) = m.get_one::<String>("as-of") {
            let date = parse_date(as_of.trim()).context("Invalid --as-of")?;
            cfg.as_of = date.and_time(NaiveTime::MIN);
        }
        cfg.calendar_months = m.get_flag("calendar-months");
        Ok(cfg)
    }
}
