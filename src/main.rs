//! Binary entry point for `csv-replace`.

use std::process;

fn main() {
    if let Err(e) = csv_replace::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
