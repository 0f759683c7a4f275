// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{DEFAULT_OUTPUT, DEFAULT_SCHEMA};
use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("moneyseed")
        .version(clap::crate_version!())
        .about("Deterministic sample data for personal finance apps")
        .subcommand(
            Command::new("generate")
                .about("Generate accounts, categories, transactions, budgets and goals")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .default_value("42")
                        .help("Random seed; the same seed and --as-of give the same document"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(DEFAULT_OUTPUT)
                        .help("Output JSON path"),
                )
                .arg(
                    Arg::new("schema")
                        .long("schema")
                        .default_value(DEFAULT_SCHEMA)
                        .help("Optional schema reference, read for information only"),
                )
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(value_parser!(u32).range(1..))
                        .default_value("24"),
                )
                .arg(
                    Arg::new("as-of")
                        .long("as-of")
                        .help("Run date YYYY-MM-DD (default: now)"),
                )
                .arg(
                    Arg::new("calendar-months")
                        .long("calendar-months")
                        .action(ArgAction::SetTrue)
                        .help("Step by calendar month instead of 30-day offsets"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("doctor")
                .about("Check a generated document for consistency problems")
                .arg(Arg::new("path").default_value(DEFAULT_OUTPUT)),
        )
        .subcommand(
            Command::new("summary")
                .about("Print counts, date range and per-month volume of a document")
                .arg(Arg::new("path").default_value(DEFAULT_OUTPUT))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
}
