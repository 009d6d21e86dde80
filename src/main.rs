//! Binary entry point for `next-fingerprint-guard`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = next_fingerprint_guard::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
