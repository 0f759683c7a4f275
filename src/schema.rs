// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the schema reference if it exists. Nothing in generation depends on
/// its contents, so every failure is logged and swallowed.
pub fn load_schema(path: &Path) -> Option<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                path = %path.display(),
                "schema not found, continuing without validation"
            );
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read schema");
            return None;
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "schema is not valid JSON");
            None
        }
    }
}
