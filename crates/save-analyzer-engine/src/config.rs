use crate::{Error, Result};
use serde::Serialize;

/// Default maximum delay between two saves of one session (30 minutes)
pub const DEFAULT_GAP_THRESHOLD_SECS: i64 = 30 * 60;

/// Default minimum number of saves for a session to be reported
pub const DEFAULT_MIN_SAVES: usize = 2;

/// Settings for a segmentation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentConfig {
    /// Gaps strictly below this many seconds keep two saves in one session.
    pub gap_threshold: i64,

    /// Sessions with fewer saves are dropped from the report.
    pub min_saves: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD_SECS,
            min_saves: DEFAULT_MIN_SAVES,
        }
    }
}

impl SegmentConfig {
    pub fn new(gap_threshold: i64, min_saves: usize) -> Self {
        Self {
            gap_threshold,
            min_saves,
        }
    }

    pub fn gap_threshold(mut self, seconds: i64) -> Self {
        self.gap_threshold = seconds;
        self
    }

    pub fn min_saves(mut self, count: usize) -> Self {
        self.min_saves = count;
        self
    }

    /// Check the ranges `segment` assumes. Callers run this before segmenting.
    pub fn validate(&self) -> Result<()> {
        if self.gap_threshold <= 0 {
            return Err(Error::InvalidConfig(format!(
                "gap threshold must be positive, got {}s",
                self.gap_threshold
            )));
        }
        if self.min_saves == 0 {
            return Err(Error::InvalidConfig(
                "minimum saves per session must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
