// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::FinanceData;
use crate::report::{Summary, count_invalid_transactions, print_summary};
use crate::utils::maybe_print_json;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").context("missing document path")?;
    let summary = summarize(Path::new(path.trim()))?;
    if !maybe_print_json(m.get_flag("json"), &summary)? {
        print_summary(&summary);
    }
    Ok(())
}

pub fn summarize(path: &Path) -> Result<Summary> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Open document {}", path.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Parse JSON {}", path.display()))?;
    let invalid = count_invalid_transactions(&doc);
    let data: FinanceData = serde_json::from_value(doc)
        .with_context(|| format!("{} is not a generated finance document", path.display()))?;
    Ok(Summary::new(&data, invalid))
}
