//! logisim2hex CLI - convert a Logisim hex dump to a `$readmemh` listing.

use std::path::PathBuf;

use clap::Parser;

use rtldiff::mem;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "logisim2hex")]
#[command(about = "Convert Logisim hex format to standard hex format for $readmemh")]
#[command(version)]
struct Cli {
    /// Logisim hex dump
    #[arg(value_name = "INPUT_HEX")]
    input: PathBuf,

    /// Dense one-word-per-line listing to write
    #[arg(value_name = "OUTPUT_HEX")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        });
    });

    match mem::convert_file(&cli.input, &cli.output) {
        Ok(image) => {
            println!(
                "Converted {} instructions from {} to {}",
                image.word_count(),
                cli.input.display(),
                cli.output.display()
            );
            if let Some(max) = image.max_index() {
                println!(
                    "Memory spans from word 0 to word {max} (byte address 0x{:x})",
                    max * 4
                );
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
