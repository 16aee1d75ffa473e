#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod dialect;
pub mod error;
pub mod ops;

pub use dialect::Dialect;
pub use error::*;
pub use ops::{Preview, Replacement, Rewriter, update_row_values};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    env_logger::init();

    let args = cli::ReplaceArgs::parse();
    command::replace::execute(args)
}
