//! Quality values and their conversions to and from error probabilities.

use std::fmt;

use serde::Serialize;

use super::Error;

//=======//
// Phred //
//=======//

/// A Phred-scaled quality value, `Q = -10 log10(p)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Phred(pub(crate) u8);

impl Phred {
    /// The lowest quality value.
    pub const MIN: Self = Phred(0);

    /// The highest quality value. An error probability of zero maps here.
    pub const MAX: Self = Phred(254);

    /// A quality value that could not be determined.
    pub const UNDEFINED: Self = Phred(255);

    /// Creates a new [`Phred`] from a raw score.
    pub const fn new(score: u8) -> Self {
        Phred(score)
    }

    /// The raw score.
    pub const fn score(&self) -> u8 {
        self.0
    }

    /// The error probability this quality value stands for. [`Phred::UNDEFINED`]
    /// has no probability and yields `NaN`.
    pub fn probability(&self) -> f64 {
        if *self == Self::UNDEFINED {
            return f64::NAN;
        }

        f64::powf(10.0, -(self.score() as f64) / 10.0)
    }

    /// The quality value closest to the error probability `p`.
    pub fn from_probability(p: f64) -> Self {
        if p.is_nan() {
            return Self::UNDEFINED;
        }

        if p <= 0.0 {
            return Self::MAX;
        }

        let q = (-10.0 * p.log10()).round();
        Phred(q.clamp(Self::MIN.0 as f64, Self::MAX.0 as f64) as u8)
    }
}

impl From<u8> for Phred {
    fn from(score: u8) -> Self {
        Phred(score)
    }
}

impl From<Phred> for u8 {
    fn from(phred: Phred) -> Self {
        phred.0
    }
}

impl fmt::Display for Phred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//========//
// Solexa //
//========//

/// A Solexa-scaled quality value, `Q = -10 log10(p / (1 - p))`, as emitted
/// by the early Illumina (Solexa) pipelines.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Solexa(i8);

impl Solexa {
    /// The lowest Solexa score.
    pub const MIN: Self = Solexa(-5);

    /// The highest Solexa score.
    pub const MAX: Self = Solexa(62);

    /// Creates a new [`Solexa`] score, clamped to [`Solexa::MIN`]..=[`Solexa::MAX`].
    pub fn new(score: i8) -> Self {
        Solexa(score.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The raw score.
    pub fn score(&self) -> i8 {
        self.0
    }

    /// The error probability this score stands for.
    pub fn probability(&self) -> f64 {
        let odds = f64::powf(10.0, -(self.score() as f64) / 10.0);
        odds / (1.0 + odds)
    }

    /// The Solexa score closest to the error probability `p`, which must lie
    /// within `[0, 1]`.
    pub fn from_probability(p: f64) -> Self {
        if p <= 0.0 {
            return Self::MAX;
        }

        if p >= 1.0 {
            return Self::MIN;
        }

        let q = (-10.0 * (p / (1.0 - p)).log10()).round();
        Solexa(q.clamp(Self::MIN.0 as f64, Self::MAX.0 as f64) as i8)
    }
}

//==================//
// Quality Encoding //
//==================//

/// The ASCII encodings used for quality lines in FASTQ files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QualityEncoding {
    /// Sanger encoding, also used from Illumina 1.8 onwards (offset 33).
    Sanger,

    /// Illumina 1.3 to 1.7 encoding (offset 64).
    Illumina1Point3,
}

impl QualityEncoding {
    /// The ASCII value of a zero quality score.
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Sanger => 33,
            Self::Illumina1Point3 => 64,
        }
    }

    /// The highest quality score the encoding can represent.
    pub const fn max(&self) -> Phred {
        match self {
            Self::Sanger => Phred(93),
            Self::Illumina1Point3 => Phred(62),
        }
    }

    /// Decodes a single quality character.
    pub fn decode(&self, c: u8) -> Result<Phred, Error> {
        match c.checked_sub(self.offset()) {
            Some(score) if score <= self.max().score() => Ok(Phred(score)),
            _ => Err(Error::InvalidScore {
                byte: c,
                encoding: *self,
            }),
        }
    }

    /// Encodes a quality value, saturating at [`QualityEncoding::max`].
    pub fn encode(&self, phred: Phred) -> u8 {
        self.offset() + phred.min(self.max()).score()
    }
}

impl fmt::Display for QualityEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sanger => write!(f, "Sanger/Illumina 1.8"),
            Self::Illumina1Point3 => write!(f, "Illumina 1.3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_correctly_computes_probabilities() {
        assert!((Phred(0).probability() - 1.0).abs() < f64::EPSILON);
        assert!((Phred(10).probability() - 0.1).abs() < f64::EPSILON);
        assert!((Phred(20).probability() - 0.01).abs() < f64::EPSILON);
        assert!((Phred(30).probability() - 0.001).abs() < f64::EPSILON);
        assert!((Phred(40).probability() - 0.0001).abs() < f64::EPSILON);
        assert!(Phred::UNDEFINED.probability().is_nan());
    }

    #[test]
    fn it_recovers_every_score_from_its_probability() {
        for score in 0..=254u8 {
            let phred = Phred(score);
            assert_eq!(Phred::from_probability(phred.probability()), phred);
        }
    }

    #[test]
    fn it_handles_degenerate_probabilities() {
        assert_eq!(Phred::from_probability(0.0), Phred::MAX);
        assert_eq!(Phred::from_probability(-0.5), Phred::MAX);
        assert_eq!(Phred::from_probability(1.0), Phred::MIN);
        assert_eq!(Phred::from_probability(2.0), Phred::MIN);
        assert_eq!(Phred::from_probability(f64::NAN), Phred::UNDEFINED);
    }

    #[test]
    fn it_converts_solexa_scores() {
        // Solexa and Phred agree closely at high quality.
        assert_eq!(Solexa::from_probability(Phred(40).probability()), Solexa(40));
        assert_eq!(Phred::from_probability(Solexa(40).probability()), Phred(40));

        // A Solexa score of zero is an even chance of error.
        assert!((Solexa(0).probability() - 0.5).abs() < f64::EPSILON);
        assert_eq!(Solexa::from_probability(0.5), Solexa(0));

        assert_eq!(Solexa::from_probability(1.0), Solexa::MIN);
        assert_eq!(Solexa::from_probability(0.0), Solexa::MAX);
        assert_eq!(Solexa::new(-40), Solexa::MIN);
    }

    #[test]
    fn it_correctly_converts_from_chars() {
        //========//
        // Sanger //
        //========//

        assert_eq!(QualityEncoding::Sanger.decode(b'!').unwrap(), Phred(0));
        assert_eq!(QualityEncoding::Sanger.decode(b'I').unwrap(), Phred(40));
        assert_eq!(QualityEncoding::Sanger.decode(b'~').unwrap(), Phred(93));
        assert!(QualityEncoding::Sanger.decode(b' ').is_err());

        //==============//
        // Illumina 1.3 //
        //==============//

        assert_eq!(QualityEncoding::Illumina1Point3.decode(b'@').unwrap(), Phred(0));
        assert_eq!(QualityEncoding::Illumina1Point3.decode(b'h').unwrap(), Phred(40));

        let err = QualityEncoding::Illumina1Point3.decode(b'5').unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid quality character '5' for Illumina 1.3 encoding"
        );
    }

    #[test]
    fn it_correctly_converts_to_chars() {
        assert_eq!(QualityEncoding::Sanger.encode(Phred(0)), b'!');
        assert_eq!(QualityEncoding::Sanger.encode(Phred(40)), b'I');
        assert_eq!(QualityEncoding::Sanger.encode(Phred::MAX), b'~');
        assert_eq!(QualityEncoding::Illumina1Point3.encode(Phred(40)), b'h');
        assert_eq!(QualityEncoding::Illumina1Point3.encode(Phred(93)), b'~');
    }
}
