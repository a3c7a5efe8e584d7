// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is deliberately nothing to parse: the tool takes no flags, no
// subcommands, and no positional arguments. Deriving Parser on an empty
// struct still buys us the standard --help and --version handling, and
// rejects any stray arguments with a proper usage message.
//
// Rust concepts:
// - Derive macros: Automatically generate code for our types
// - Unit-like structs: A struct with no fields still carries behavior
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "joke-teller",
    version = "0.1.0",
    about = "Fetches a random Chuck Norris joke and prints it",
    long_about = "joke-teller sends one HTTP GET to api.chucknorris.io, decodes the \
                  JSON response, and prints the joke text to standard output. \
                  It takes no arguments."
)]
pub struct Cli {}
