// NOTE: Flag Naming
//
// Short and long names mirror the flags players already use in scripts:
// -d/--dir, --delay (alias --sd), -s/--short, -t/--table.
// Values that may also come from the config file are Option<_> so that an
// unset flag falls through to the file, then to the built-in default.

mod enums;
pub mod hints;

pub use enums::*;

use crate::presentation::formatters::duration::parse_duration_arg;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "save-analyzer")]
#[command(about = "analyze your saves", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        short = 'd',
        long,
        value_name = "PATH",
        help = "saves dir [default: current dir]"
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long,
        alias = "sd",
        value_name = "DURATION",
        value_parser = parse_duration_arg,
        help = "max delay between two saves in one game session, alias --sd (e.g. 30m, 1h30m) [default: 30m]"
    )]
    pub delay: Option<i64>,

    #[arg(
        short = 's',
        long,
        value_name = "NUMBER",
        help = "skip sessions with fewer saves than NUMBER [default: 2]"
    )]
    pub short: Option<usize>,

    #[arg(short = 't', long, help = "print sessions table")]
    pub table: bool,

    #[arg(long, default_value = "plain", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, value_name = "PATH", help = "Config file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn", help = "Diagnostic log level (stderr)")]
    pub log_level: LogLevel,
}
