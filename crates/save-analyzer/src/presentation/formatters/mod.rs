pub mod duration;
pub mod session_table;
pub mod time;

pub use duration::{format_duration, parse_duration_arg};
pub use time::format_stamp;
