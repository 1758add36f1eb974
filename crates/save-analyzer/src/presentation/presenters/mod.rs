mod analysis;

pub use analysis::present_analysis;
