// src/joke/mod.rs
// =============================================================================
// This module contains everything joke-related.
//
// Submodules:
// - model: The typed shape of the API's JSON response
// - fetch: The single GET-decode-print operation and its error taxonomy
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod fetch;
mod model;

// Re-export public items from submodules
// This lets users write `joke::fetch_and_log()` instead of
// `joke::fetch::fetch_and_log()`
pub use fetch::{fetch_and_log, fetch_joke, FetchError, JOKE_ENDPOINT};
pub use model::JokeResponse;
