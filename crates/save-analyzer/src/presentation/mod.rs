//! # Presentation Layer
//!
//! Output for the analyzer follows a one-way flow so that the segmentation
//! engine never knows how its results are shown:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)      (Converter)       (Contract)       (Driver)      (Text/JSON)
//! ```
//!
//! ## Directory Guide
//!
//! ### 1. `view_models/` (The Data Contract)
//! * Plain data, `Serialize`. Numbers stay numbers (`duration_secs`, `start_ts`);
//!   JSON output is an API.
//! * Text layout lives in each view model's `fmt::Display`.
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * Converts a `SegmentReport` into a view model and decides on badges and tips.
//!
//! ### 3. `renderers/` (The Output Strategy)
//! * Switches between JSON and text, adds badge and tips, handles color.
//!
//! ### 4. `formatters/` (The Utilities)
//! * Go-style durations, local timestamps, the sessions table.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, OutputFormat, StatusBadge, StatusLevel};
