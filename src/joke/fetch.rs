// src/joke/fetch.rs
// =============================================================================
// This module performs the one network operation this tool exists for:
// GET the joke endpoint, decode the JSON body, and log the joke text.
//
// The whole flow is a single linear sequence:
//   request -> await response -> check status -> decode body -> print
//
// There is exactly ONE outbound request per invocation. No retries, no
// caching, no fallback endpoints. If anything goes wrong, the error says
// which of the three failure kinds happened (network / HTTP status / decode)
// so the caller can report it distinctly instead of swallowing it.
//
// Rust concepts:
// - async/await: The network call is the one suspension point
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Enums: To represent the different failure kinds
// =============================================================================

use reqwest::Client;
use thiserror::Error;

use super::model::JokeResponse;

// The fixed endpoint this tool queries
//
// No query parameters, no headers, no request body - just a plain GET.
pub const JOKE_ENDPOINT: &str = "https://api.chucknorris.io/jokes/random";

// Everything that can go wrong during one fetch
//
// #[derive(Error)] (from the thiserror crate) generates the Display and
// std::error::Error implementations from the #[error("...")] attributes,
// so each variant carries its own user-visible message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response: connection refused,
    /// DNS failure, or timeout
    #[error("network error: {0}")]
    Network(String),

    /// The server answered, but with a status outside 2xx
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The body arrived but is not valid JSON, or lacks a required field
    #[error("could not decode response body: {0}")]
    Decode(String),
}

// Fetches one joke from the given endpoint
//
// Parameters:
//   client: reqwest HTTP client (borrowed - the caller owns and reuses it)
//   url: the endpoint to query (JOKE_ENDPOINT in production, a local
//        test server in tests)
//
// Returns: the decoded JokeResponse, or a FetchError saying what failed
//
// Why take the URL as a parameter instead of hardcoding JOKE_ENDPOINT here?
// - Tests can point this at a local server and never touch the network
// - The production call site passes the constant, so behavior is identical
pub async fn fetch_joke(client: &Client, url: &str) -> Result<JokeResponse, FetchError> {
    // Send the GET request and await the response headers
    // This is the single suspension point of the whole program
    let response = client
        .get(url)
        .send()
        .await
        .map_err(categorize_request_error)?;

    // A response arrived - but only 2xx counts as success
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    // Read the body as text first, then decode it ourselves
    // This keeps "the body never arrived" (network) separate from
    // "the body arrived but isn't the shape we expect" (decode)
    let body = response
        .text()
        .await
        .map_err(categorize_request_error)?;

    let joke: JokeResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(joke)
}

// Fetches one joke and writes its text to standard output
//
// Result: no return value on success; the side effect is a single log line.
// Each invocation is independent - calling this twice makes two requests
// and prints two lines, with no state carried between them.
pub async fn fetch_and_log(client: &Client, url: &str) -> Result<(), FetchError> {
    let joke = fetch_joke(client, url).await?;
    println!("{}", joke.value);
    Ok(())
}

// Categorizes transport-level failures from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Connection refused / host unreachable
// All of these mean "no usable response", so they map to FetchError::Network
// with a message saying which one it was.
fn categorize_request_error(error: reqwest::Error) -> FetchError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        let error_string = error.to_string();
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            format!("connection failed: {}", error_string)
        }
    } else {
        error.to_string()
    };

    FetchError::Network(message)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does .await do?
//    - Waits for an async operation to complete
//    - Yields control to the runtime while waiting
//    - Only works inside async functions
//
// 2. What is map_err?
//    - Transforms the error side of a Result, leaving Ok untouched
//    - Here it converts reqwest's error type into our FetchError
//    - Combined with ?, it propagates the converted error to the caller
//
// 3. Why not response.json::<JokeResponse>()?
//    - reqwest can decode JSON directly, but it wraps serde's error inside
//      its own error type, blurring network vs decode failures
//    - Reading text first, then decoding, keeps the two kinds apart
//
// 4. Why does fetch_and_log exist separately from fetch_joke?
//    - fetch_joke returns data, so tests can assert on the decoded value
//    - fetch_and_log adds the one side effect (the printed line)
//    - Splitting them keeps the printing out of the testable core
// -----------------------------------------------------------------------------
