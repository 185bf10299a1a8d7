//! rtldiff CLI - RTL vs Golden Model trace comparison

mod cli;
mod terminal;

use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};
use rtldiff::trace::{self, TraceTable};

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        // Usage errors exit 1; --help and --version are not failures.
        std::process::exit(if e.use_stderr() {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        });
    });

    let default_level = if cli.verbose {
        "rtldiff=debug"
    } else if cli.silent {
        "rtldiff=error"
    } else {
        "rtldiff=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let rtl = match load_table(&cli.rtl, "RTL") {
        Ok(table) => table,
        Err(code) => return code,
    };
    let golden = match load_table(&cli.golden, "Golden Model") {
        Ok(table) => table,
        Err(code) => return code,
    };

    let report = trace::compare_tables(&rtl, &golden);
    print!("{report}");

    if report.is_match() {
        terminal::success("RTL matches the Golden Model");
        EXIT_SUCCESS
    } else {
        terminal::error(&format!(
            "{} cycles diverged or were missing",
            report.mismatches
        ));
        EXIT_FAILURE
    }
}

fn load_table(path: &Path, label: &str) -> Result<TraceTable, i32> {
    match trace::parse_trace_file(path) {
        Ok(table) => {
            info!(
                "found {} cycles in {label} output ({})",
                table.len(),
                path.display()
            );
            Ok(table)
        }
        Err(e) => {
            terminal::error(&format!(
                "failed to read {label} output {}: {e}",
                path.display()
            ));
            Err(EXIT_FAILURE)
        }
    }
}
