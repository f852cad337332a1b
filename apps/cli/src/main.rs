//! Canteen Split CLI - split a canteen bill from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start from the usual menu and people
//! canteen seed
//!
//! # Akhil takes two puris, Riyas a dosa, and one tea is shared
//! canteen order Akhil Puri --delta 2
//! canteen order Riyas Dosa
//! canteen share Tea
//!
//! # See who owes what
//! canteen bill
//! ```
//!
//! Set `RUST_LOG=debug` to see every command on stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use canteen_cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    canteen_cli::init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    match canteen_cli::run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(code = ?e.code, "Command failed");
            if json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
