// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::FinanceData;
use crate::report::{Issue, consistency_issues, field_issues};
use crate::utils::pretty_table;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").context("missing document path")?;
    let issues = diagnose(Path::new(path.trim()))?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn diagnose(path: &Path) -> Result<Vec<Issue>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Open document {}", path.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Parse JSON {}", path.display()))?;

    let mut issues = field_issues(&doc);
    match serde_json::from_value::<FinanceData>(doc) {
        Ok(data) => issues.extend(consistency_issues(&data)),
        Err(e) => issues.push(Issue {
            kind: "unreadable_document",
            detail: e.to_string(),
        }),
    }
    Ok(issues)
}
