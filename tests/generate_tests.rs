// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneyseed::commands::{doctor, generate, summary};
use moneyseed::config::GeneratorConfig;
use moneyseed::pipeline::Progress;
use moneyseed::models::FinanceData;
use moneyseed::{cli, pipeline};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::Path;
use tempfile::tempdir;

fn config(dir: &Path, as_of: (i32, u32, u32)) -> GeneratorConfig {
    GeneratorConfig {
        as_of: NaiveDate::from_ymd_opt(as_of.0, as_of.1, as_of.2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        output: dir.join("out.json"),
        schema: dir.join("schema.json"),
        ..GeneratorConfig::default()
    }
}

fn run_cli(args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("generate", gen_m)) = matches.subcommand() {
        generate::handle(gen_m).unwrap();
    } else {
        panic!("no generate subcommand");
    }
}

#[test]
fn same_seed_writes_identical_documents() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    let schema = dir.path().join("missing-schema.json");
    for out in [&a, &b] {
        run_cli(&[
            "moneyseed",
            "generate",
            "--seed",
            "42",
            "--as-of",
            "2025-06-15",
            "--schema",
            schema.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--json",
        ]);
    }
    let first = std::fs::read(&a).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, std::fs::read(&b).unwrap());
}

#[test]
fn different_seeds_diverge() {
    let dir = tempdir().unwrap();
    let mut cfg = config(dir.path(), (2025, 6, 15));
    let one = pipeline::generate(&cfg).unwrap();
    cfg.seed = 43;
    let two = pipeline::generate(&cfg).unwrap();
    assert_ne!(one, two);
}

#[test]
fn document_has_expected_sections_and_shape() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), (2025, 6, 15));
    let summary = generate::run(&cfg, true).unwrap();

    let doc: Value =
        serde_json::from_str(&std::fs::read_to_string(&cfg.output).unwrap()).unwrap();
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    for k in [
        "transactions",
        "accounts",
        "budgets",
        "categories",
        "recurring_transactions",
        "financial_goals",
    ] {
        assert!(keys.iter().any(|x| x == k), "missing {}", k);
    }

    assert_eq!(summary.accounts, 4);
    assert_eq!(summary.categories, 18);
    assert_eq!(summary.recurring_transactions, 5);
    assert_eq!(summary.financial_goals, 4);
    assert_eq!(summary.invalid_transactions, 0);
    assert_eq!(summary.per_month.len(), 24);
    assert_eq!(summary.budgets, 24 * 5);
    assert_eq!(summary.first_date, NaiveDate::from_ymd_opt(2023, 6, 1));

    let txn = &doc["transactions"][0];
    assert!(txn["amount"].is_number());
    assert!(txn["tags"].is_array());
    assert!(txn.get("notes").is_some());
    let card = doc["accounts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["type"] == json!("credit_card"))
        .unwrap();
    assert!(card["credit_limit"].is_u64());
    assert_eq!(doc["financial_goals"][1]["deadline"], json!("2025-12-12"));
}

#[test]
fn every_reference_resolves() {
    let dir = tempdir().unwrap();
    let data: FinanceData = pipeline::generate(&config(dir.path(), (2025, 6, 15))).unwrap();
    let cats: HashSet<_> = data.categories.iter().map(|c| c.id).collect();
    let accts: HashSet<_> = data.accounts.iter().map(|a| a.id).collect();
    assert!(data
        .transactions
        .iter()
        .all(|t| cats.contains(&t.category) && accts.contains(&t.account)));
    assert!(data.budgets.iter().all(|b| cats.contains(&b.category)));
}

#[test]
fn thirty_day_steps_can_revisit_a_month() {
    let dir = tempdir().unwrap();
    let mut cfg = config(dir.path(), (2025, 1, 1));
    let drift = pipeline::month_schedule(&cfg).unwrap();
    assert_eq!(drift.len(), 24);
    assert_eq!(drift.iter().filter(|m| **m == (2023, 7)).count(), 2);
    assert_eq!(drift.last(), Some(&(2024, 11)));

    cfg.calendar_months = true;
    let calendar = pipeline::month_schedule(&cfg).unwrap();
    let unique: HashSet<_> = calendar.iter().collect();
    assert_eq!(unique.len(), 24);
    assert_eq!(calendar.first(), Some(&(2023, 1)));
    assert_eq!(calendar.last(), Some(&(2024, 12)));
}

#[test]
fn doctor_accepts_a_calendar_month_document() {
    let dir = tempdir().unwrap();
    let mut cfg = config(dir.path(), (2025, 1, 1));
    cfg.calendar_months = true;
    generate::run(&cfg, true).unwrap();
    let issues = doctor::diagnose(&cfg.output).unwrap();
    assert!(issues.is_empty(), "{:?}", issues);

    let s = summary::summarize(&cfg.output).unwrap();
    assert!(s.out_of_range_months().is_empty());
}

#[test]
fn doctor_flags_revisited_month_under_drift() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), (2025, 1, 1));
    generate::run(&cfg, true).unwrap();
    let issues = doctor::diagnose(&cfg.output).unwrap();
    assert!(issues
        .iter()
        .any(|i| i.kind == "month_volume" && i.detail.starts_with("2023-07")));
}

#[test]
fn doctor_reports_missing_fields_and_bad_budgets() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), (2025, 6, 15));
    generate::run(&cfg, true).unwrap();

    let mut doc: Value =
        serde_json::from_str(&std::fs::read_to_string(&cfg.output).unwrap()).unwrap();
    doc["transactions"][0]["description"] = Value::Null;
    doc["budgets"][0]["remaining"] = json!(-1.0);
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, serde_json::to_string(&doc).unwrap()).unwrap();

    let issues = doctor::diagnose(&broken).unwrap();
    assert!(issues.iter().any(|i| i.kind == "missing_fields"));
    // a null description no longer parses into the typed model
    assert!(issues.iter().any(|i| i.kind == "unreadable_document"));

    doc["transactions"][0]["description"] = json!("fixed");
    std::fs::write(&broken, serde_json::to_string(&doc).unwrap()).unwrap();
    let issues = doctor::diagnose(&broken).unwrap();
    assert!(issues.iter().any(|i| i.kind == "budget_remaining_mismatch"));
}

#[test]
fn schema_file_is_optional_and_informational() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), (2025, 6, 15));
    let without = generate::run(&cfg, true).unwrap();
    let bytes_without = std::fs::read(&cfg.output).unwrap();

    std::fs::write(&cfg.schema, r#"{"type": "object", "properties": {}}"#).unwrap();
    let with = generate::run(&cfg, true).unwrap();
    assert_eq!(without, with);
    assert_eq!(bytes_without, std::fs::read(&cfg.output).unwrap());
}

#[test]
fn summary_rejects_foreign_documents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("other.json");
    std::fs::write(&path, r#"{"hello": "world"}"#).unwrap();
    assert!(summary::summarize(&path).is_err());
}

#[test]
fn default_config_repeats_within_a_day() {
    let one = pipeline::generate(&GeneratorConfig::default()).unwrap();
    let two = pipeline::generate(&GeneratorConfig::default()).unwrap();
    assert_eq!(
        serde_json::to_string_pretty(&one).unwrap(),
        serde_json::to_string_pretty(&two).unwrap()
    );
    assert_eq!(GeneratorConfig::default().as_of.time(), chrono::NaiveTime::MIN);
}

#[test]
fn progress_reports_every_month_batch() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), (2025, 1, 1));
    let mut steps = Vec::new();
    let data = pipeline::generate_with(&cfg, |p| steps.push(p)).unwrap();

    let months: Vec<_> = steps
        .iter()
        .filter_map(|p| match p {
            Progress::Month { year, month, count } => Some((*year, *month, *count)),
            _ => None,
        })
        .collect();
    assert_eq!(months.len(), 24);
    assert_eq!(months.iter().filter(|m| (m.0, m.1) == (2023, 7)).count(), 2);
    assert_eq!(
        months.iter().map(|m| m.2).sum::<usize>(),
        data.transactions.len()
    );
    assert_eq!(steps.first(), Some(&Progress::Accounts(4)));
    assert_eq!(steps.last(), Some(&Progress::Goals(4)));

    assert_eq!(
        generate::progress_line(Progress::Month {
            year: 2023,
            month: 7,
            count: 61
        }),
        "  ✓ Generated 61 transactions for 2023-07"
    );
}
