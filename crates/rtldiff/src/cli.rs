//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::Parser;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "rtldiff")]
#[command(about = "Compare RTL testbench output with Golden Model output, cycle by cycle")]
#[command(version)]
pub struct Cli {
    /// RTL testbench trace file
    #[arg(value_name = "RTL_OUTPUT")]
    pub rtl: PathBuf,

    /// Golden Model trace file
    #[arg(value_name = "GOLDEN_OUTPUT")]
    pub golden: PathBuf,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress diagnostics (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}
