//! Lossy compression of per-base quality scores by binning.
//!
//! Quality values are mapped through a 256-entry [`CompressionScheme`] so that
//! fine-grained scores collapse onto a handful of representative values. The
//! default scheme is the eight-level binning Illumina describes in its data
//! compression white paper:
//!
//! | Old quality score | New quality score |
//! |-------------------|-------------------|
//! | 0–1               | 0                 |
//! | 2–9               | 6                 |
//! | 10–19             | 15                |
//! | 20–24             | 22                |
//! | 25–29             | 27                |
//! | 30–34             | 33                |
//! | 35–39             | 37                |
//! | ≥ 40              | 40                |
//!
//! ```
//! use illumina::quality::{bin_compress, Phred, Phreds};
//!
//! let mut scores = Phreds(vec![Phred::new(1), Phred::new(12), Phred::new(41)]);
//! bin_compress(&mut scores, None).unwrap();
//! assert_eq!(scores.0, vec![Phred::new(0), Phred::new(15), Phred::new(40)]);
//! ```

use std::error;
use std::fmt;

pub mod compress;
pub mod phred;
pub mod scheme;
pub mod scores;

pub use compress::{bin_compress, QualityLetter, Scorer, Slice};
pub use phred::{Phred, QualityEncoding, Solexa};
pub use scheme::{CompressionScheme, DEFAULT_COMPRESSION, ILLUMINA_BINS};
pub use scores::{Phreds, QualityLetters, SolexaScores};

//===============//
// Quality Error //
//===============//

/// An error raised while handling quality values.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A position outside of the scorer's `start..end` range was addressed.
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The first valid position.
        start: usize,
        /// One past the last valid position.
        end: usize,
    },

    /// An error probability outside of `[0, 1]` was supplied.
    InvalidProbability(f64),

    /// A quality character could not be decoded.
    InvalidScore {
        /// The offending character.
        byte: u8,
        /// The encoding it was decoded with.
        encoding: QualityEncoding,
    },

    /// The sequence and quality lines differ in length.
    LengthMismatch {
        /// The length of the sequence.
        sequence: usize,
        /// The number of quality values.
        quality: usize,
    },

    /// A set of bins could not be turned into a compression scheme.
    InvalidBins(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, start, end } => {
                write!(f, "position {} out of range [{}, {})", index, start, end)
            }
            Error::InvalidProbability(p) => write!(f, "invalid error probability: {}", p),
            Error::InvalidScore { byte, encoding } => write!(
                f,
                "invalid quality character '{}' for {} encoding",
                *byte as char, encoding
            ),
            Error::LengthMismatch { sequence, quality } => write!(
                f,
                "sequence length ({}) does not match quality length ({})",
                sequence, quality
            ),
            Error::InvalidBins(reason) => write!(f, "invalid bins: {}", reason),
        }
    }
}

impl error::Error for Error {}
