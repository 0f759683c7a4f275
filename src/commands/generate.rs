// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::GeneratorConfig;
use crate::pipeline::{self, Progress};
use crate::report::{Summary, count_invalid_transactions, print_summary};
use crate::schema::load_schema;
use crate::utils::maybe_print_json;
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let cfg = GeneratorConfig::from_matches(m)?;
    let json_flag = m.get_flag("json");
    let summary = run(&cfg, json_flag)?;
    if !maybe_print_json(json_flag, &summary)? {
        print_summary(&summary);
        println!("\n✓ Data generation complete!");
    }
    Ok(())
}

/// Generates, writes and validates one document. Progress lines are
/// suppressed when `quiet` is set.
pub fn run(cfg: &GeneratorConfig, quiet: bool) -> Result<Summary> {
    let say = |line: String| {
        if !quiet {
            println!("{}", line);
        }
    };

    say("Personal Finance Data Generator".to_string());
    if let Some(schema) = load_schema(&cfg.schema) {
        let keys = schema.as_object().map(|o| o.len()).unwrap_or(0);
        say(format!("✓ Schema loaded from {} ({} keys)", cfg.schema.display(), keys));
    }

    say(format!(
        "Generating {} months of data (seed {}, as of {})...",
        cfg.months, cfg.seed, cfg.as_of
    ));
    let data = pipeline::generate_with(cfg, |step| say(progress_line(step)))?;
    say(format!("✓ Total transactions: {}", data.transactions.len()));

    let out = serde_json::to_string_pretty(&data)?;
    std::fs::write(&cfg.output, &out)
        .with_context(|| format!("Write {}", cfg.output.display()))?;
    say(format!("✓ Data saved to {}", cfg.output.display()));

    let doc: serde_json::Value = serde_json::from_str(&out)?;
    Ok(Summary::new(&data, count_invalid_transactions(&doc)))
}

pub fn progress_line(step: Progress) -> String {
    match step {
        Progress::Accounts(n) => format!("✓ Generated {} accounts", n),
        Progress::Categories(n) => format!("✓ Generated {} categories", n),
        Progress::Recurring(n) => format!("✓ Generated {} recurring transactions", n),
        Progress::Month { year, month, count } => {
            format!("  ✓ Generated {} transactions for {}-{:02}", count, year, month)
        }
        Progress::Budgets(n) => format!("✓ Generated {} budget entries", n),
        Progress::Goals(n) => format!("✓ Generated {} financial goals", n),
    }
}
