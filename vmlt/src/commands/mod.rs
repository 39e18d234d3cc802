//! Command modules for the vmlt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod tokenize;

// Re-export command types and functions
pub use tokenize::{run_tokenize, TokenizeArgs};
