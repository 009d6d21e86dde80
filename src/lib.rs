#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod manifest;
pub mod patterns;
pub mod rewrite;
pub mod walk;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let args = cli::GuardArgs::parse();
    command::guard::execute(args).map(|_| ())
}
