pub mod analysis;
pub mod common;
pub mod result;

pub use analysis::{AnalysisSettings, AnalysisViewModel, SessionRow, SummaryViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
