// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (only --help/--version exist)
// 2. Build one HTTP client with a request timeout
// 3. Fetch a random joke and print it
// 4. Exit with proper code (0 = joke printed, 1 = fetch failed, 2 = error)
//
// Rust concepts used:
// - async/await: Because the network call suspends while waiting
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to turn outcomes into exit codes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod joke;          // src/joke/ - the fetch-and-log operation

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

use std::time::Duration;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = joke fetched and printed
//   Ok(1) = fetch failed (network / HTTP status / decode)
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments
    // There are none to parse, but this handles --help, --version, and
    // rejects anything unexpected
    let _cli = Cli::parse();

    // Create an HTTP client with a request timeout so a dead network
    // fails within bounded time instead of hanging forever
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // The one operation this program performs: fetch a joke and print it.
    // Every failure kind is reported here at the single call site - nothing
    // is silently swallowed - and turns into a non-zero exit code.
    match joke::fetch_and_log(&client, joke::JOKE_ENDPOINT).await {
        Ok(()) => Ok(0),
        Err(e) => {
            eprintln!("❌ {}", e);
            Ok(1)
        }
    }
}
