use clap::Parser;
use clap::error::ErrorKind;
use sheetprimes_core::{ScanError, find_primes};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Need exactly one argument - the path to an Excel file.";

#[derive(Parser)]
#[command(name = "sheetprimes")]
#[command(about = "Print prime numbers found in column B of a spreadsheet")]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                // zero arguments, extra arguments, unknown flags
                _ => println!("{USAGE}"),
            }
            return ExitCode::SUCCESS;
        }
    };

    match find_primes(&cli.file) {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
        }
        Err(ScanError::Read(_)) => println!("Given file could not be read."),
        Err(ScanError::Encrypted) => println!("Given file is password protected."),
        // invariant violations get the full chain, not a short message
        Err(ScanError::Unexpected(err)) => eprintln!("{err:?}"),
    }

    // Exit status is 0 on every path, including failures. Compatibility
    // with the behavior existing callers rely on.
    ExitCode::SUCCESS
}
