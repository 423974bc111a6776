//! # Stockroom
//!
//! Entry point for the Stockroom inventory tracker.
//! All logic lives in the library crate (`stockroom_lib`).

use std::process::ExitCode;

use stockroom_lib::args::CliArgs;

#[tokio::main]
async fn main() -> ExitCode {
    let result = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => stockroom_lib::run(args).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockroom: {}", e);
            ExitCode::FAILURE
        }
    }
}
