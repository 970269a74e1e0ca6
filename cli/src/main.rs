mod args;
mod cli;
mod error;

use args::Args;
use std::process;

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = simple_logger::init_with_level(args.log_level()) {
        eprintln!("Unable to set up logging: {}", e);
    }
    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
