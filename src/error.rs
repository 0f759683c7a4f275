// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AccountType;
use thiserror::Error;

/// Failures raised while synthesizing data. All of them mean the reference
/// tables or the caller's inputs are inconsistent; none are retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
    #[error("No {0} account generated")]
    MissingAccount(AccountType),
    #[error("Invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type GenResult<T> = std::result::Result<T, GenerateError>;
