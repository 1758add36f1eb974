//! Custom assertions for save-analyzer JSON output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Summary totals
//! - Session ordinals and save counts

use anyhow::{Context, Result};
use serde_json::Value;

/// Expected values of the `content.summary` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedSummary {
    pub total_saves: u64,
    pub session_count: u64,
    pub total_duration_secs: i64,
    pub longest_duration_secs: i64,
}

/// Assert that the JSON summary matches `expected`.
pub fn assert_summary(json: &Value, expected: ExpectedSummary) -> Result<()> {
    let summary = &json["content"]["summary"];
    if !summary.is_object() {
        anyhow::bail!("Expected 'content.summary' object in JSON");
    }

    let actual = ExpectedSummary {
        total_saves: field_u64(summary, "total_saves")?,
        session_count: field_u64(summary, "session_count")?,
        total_duration_secs: field_i64(summary, "total_duration_secs")?,
        longest_duration_secs: field_i64(summary, "longest_duration_secs")?,
    };

    if actual != expected {
        anyhow::bail!("Summary mismatch: expected {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

/// Assert that sessions carry ordinals 1..=n and the given save counts.
pub fn assert_session_saves(json: &Value, expected_saves: &[u64]) -> Result<()> {
    let sessions = json["content"]["sessions"]
        .as_array()
        .context("Expected 'content.sessions' array in JSON")?;

    if sessions.len() != expected_saves.len() {
        anyhow::bail!(
            "Expected {} sessions, got {}",
            expected_saves.len(),
            sessions.len()
        );
    }

    for (i, (session, expected)) in sessions.iter().zip(expected_saves).enumerate() {
        let ordinal = field_u64(session, "ordinal")?;
        if ordinal != i as u64 + 1 {
            anyhow::bail!("Session {} has ordinal {}", i, ordinal);
        }
        let saves = field_u64(session, "saves")?;
        if saves != *expected {
            anyhow::bail!("Session {} has {} saves, expected {}", i, saves, expected);
        }
    }

    Ok(())
}

fn field_u64(value: &Value, key: &str) -> Result<u64> {
    value[key]
        .as_u64()
        .with_context(|| format!("Missing or non-integer field '{}'", key))
}

fn field_i64(value: &Value, key: &str) -> Result<i64> {
    value[key]
        .as_i64()
        .with_context(|| format!("Missing or non-integer field '{}'", key))
}
