//! Binning tables for quality compression.

use std::ops::Index;
use std::str::FromStr;

use super::{Error, Phred};

/// Lower bounds and replacement values of the Illumina eight-level binning.
/// Scores below the first lower bound map to zero.
pub const ILLUMINA_BINS: [(u8, u8); 7] = [
    (2, 6),
    (10, 15),
    (20, 22),
    (25, 27),
    (30, 33),
    (35, 37),
    (40, 40),
];

/// The compression scheme used whenever no other scheme is given.
pub static DEFAULT_COMPRESSION: CompressionScheme = CompressionScheme::illumina();

/// A lookup table mapping every possible quality value to its replacement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompressionScheme([Phred; 256]);

impl CompressionScheme {
    /// Creates a scheme from a complete table.
    pub const fn new(table: [Phred; 256]) -> Self {
        CompressionScheme(table)
    }

    /// The Illumina eight-level binning scheme.
    pub const fn illumina() -> Self {
        Self::from_sorted_bins(&ILLUMINA_BINS)
    }

    /// Creates a scheme from `(lower bound, value)` bins. Each bin covers its
    /// lower bound up to the next bin's lower bound; the last bin extends to
    /// the end of the table. Lower bounds must be strictly ascending.
    pub fn from_bins(bins: &[(u8, u8)]) -> Result<Self, Error> {
        if bins.is_empty() {
            return Err(Error::InvalidBins(String::from("at least one bin is required")));
        }

        if let Some(pair) = bins.windows(2).find(|pair| pair[0].0 >= pair[1].0) {
            return Err(Error::InvalidBins(format!(
                "lower bounds must be ascending, found {} followed by {}",
                pair[0].0, pair[1].0
            )));
        }

        Ok(Self::from_sorted_bins(bins))
    }

    const fn from_sorted_bins(bins: &[(u8, u8)]) -> Self {
        let mut table = [Phred(0); 256];

        let mut b = 0;
        while b < bins.len() {
            let (lower, value) = bins[b];
            let upper = if b + 1 < bins.len() {
                bins[b + 1].0 as usize
            } else {
                256
            };

            let mut i = lower as usize;
            while i < upper {
                table[i] = Phred(value);
                i += 1;
            }

            b += 1;
        }

        CompressionScheme(table)
    }

    /// Looks up the replacement for a quality value.
    pub fn get(&self, phred: Phred) -> Phred {
        self.0[phred.score() as usize]
    }
}

impl Default for CompressionScheme {
    fn default() -> Self {
        Self::illumina()
    }
}

impl Index<Phred> for CompressionScheme {
    type Output = Phred;

    fn index(&self, phred: Phred) -> &Self::Output {
        &self.0[phred.score() as usize]
    }
}

/// Parses bins written as comma separated `lower=value` pairs, for example
/// `2=6,10=15,20=22,25=27,30=33,35=37,40=40`.
impl FromStr for CompressionScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bins = s
            .split(',')
            .map(|bin| -> Result<(u8, u8), Error> {
                let (lower, value) = bin.trim().split_once('=').ok_or_else(|| {
                    Error::InvalidBins(format!("expected lower=value, found {:?}", bin))
                })?;

                let lower = lower
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| Error::InvalidBins(format!("lower bound {:?}: {}", lower, e)))?;
                let value = value
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| Error::InvalidBins(format!("value {:?}: {}", value, e)))?;

                Ok((lower, value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_bins(&bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_bucket(score: u8) -> u8 {
        match score {
            0..=1 => 0,
            2..=9 => 6,
            10..=19 => 15,
            20..=24 => 22,
            25..=29 => 27,
            30..=34 => 33,
            35..=39 => 37,
            _ => 40,
        }
    }

    #[test]
    fn it_builds_the_illumina_table() {
        for score in 0..=255u8 {
            assert_eq!(
                DEFAULT_COMPRESSION[Phred(score)],
                Phred(expected_bucket(score)),
                "score {}",
                score
            );
        }
    }

    #[test]
    fn it_maps_bin_values_onto_themselves() {
        for (_, value) in ILLUMINA_BINS {
            assert_eq!(DEFAULT_COMPRESSION.get(Phred(value)), Phred(value));
        }
        assert_eq!(DEFAULT_COMPRESSION.get(Phred(0)), Phred(0));
    }

    #[test]
    fn it_parses_bins() {
        let scheme = "2=6, 10=15,20=22,25=27,30=33,35=37,40=40"
            .parse::<CompressionScheme>()
            .unwrap();
        assert_eq!(scheme, CompressionScheme::illumina());

        let scheme = "20=30".parse::<CompressionScheme>().unwrap();
        assert_eq!(scheme[Phred(19)], Phred(0));
        assert_eq!(scheme[Phred(20)], Phred(30));
        assert_eq!(scheme[Phred(255)], Phred(30));
    }

    #[test]
    fn it_rejects_bad_bins() {
        assert!(CompressionScheme::from_bins(&[]).is_err());
        assert!("10=15,2=6".parse::<CompressionScheme>().is_err());
        assert!("10=15,10=20".parse::<CompressionScheme>().is_err());
        assert!("10:15".parse::<CompressionScheme>().is_err());
        assert!("10=300".parse::<CompressionScheme>().is_err());
        assert!("".parse::<CompressionScheme>().is_err());
    }
}
