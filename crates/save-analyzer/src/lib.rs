// NOTE: save-analyzer Architecture
//
// Why a separate engine crate?
// - Segmentation is a pure function of timestamps and two numbers
// - Keeping it free of I/O makes every edge case unit-testable
// - The CLI owns everything observable: directory listing, config, output
//
// Why mtimes instead of file contents?
// - Save formats differ per game and are often opaque
// - The modification time is the only signal every save file carries

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod save_loader;

pub use args::{Cli, LogLevel, OutputFormat};
pub use commands::run;
