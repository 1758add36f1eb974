//! Session segmentation engine.
//!
//! Turns an unordered set of save timestamps (Unix seconds) into ordered play
//! sessions plus aggregate totals. This crate does no I/O: listing save files
//! and rendering results belong to the CLI.
//!
//! ```
//! use save_analyzer_engine::{segment, SegmentConfig};
//!
//! let report = segment(&[0, 100, 200, 10_000, 10_050], &SegmentConfig::new(500, 2)).unwrap();
//! assert_eq!(report.summary.session_count, 2);
//! assert_eq!(report.summary.total_duration, 250);
//! ```

pub mod config;
pub mod error;
mod segment;
pub mod session;

pub use config::{SegmentConfig, DEFAULT_GAP_THRESHOLD_SECS, DEFAULT_MIN_SAVES};
pub use error::{Error, Result};
pub use segment::{segment, split_runs};
pub use session::{Run, SegmentReport, Session, SessionSummary};
