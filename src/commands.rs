//! The `illumina` subcommands.

pub mod bin;
pub mod parse;
