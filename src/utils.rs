//! Utilities that are used across the `illumina` subcommands.

pub mod args;
pub mod display;
pub mod formats;
