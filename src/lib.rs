//! `illumina` handles the metadata and quality scores of reads produced on
//! Illumina sequencers. This package is composed of both a library crate, as
//! well as a binary crate.
//!
//! The library provides two independent pieces:
//!
//! * [`metadata`] parses the read identifiers of the pre-Casava and Casava 1.8
//!   conventions into structured [`Metadata`](metadata::Metadata).
//! * [`quality`] lossily compresses quality scores by binning them through a
//!   [`CompressionScheme`](quality::CompressionScheme).
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod metadata;
pub mod quality;
