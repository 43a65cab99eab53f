//! Kireji CLI library
//!
//! This library provides the command-line interface for the kireji
//! byte-string splitter.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
