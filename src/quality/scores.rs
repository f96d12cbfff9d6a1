//! Concrete containers of quality values.

use super::{Error, Phred, QualityEncoding, QualityLetter, Scorer, Slice, Solexa};

/// Checks that a write of `e` to position `i` of a `0..end` container is valid.
fn check_write(i: usize, e: f64, end: usize) -> Result<(), Error> {
    if i >= end {
        return Err(Error::OutOfRange {
            index: i,
            start: 0,
            end,
        });
    }

    if !(0.0..=1.0).contains(&e) {
        return Err(Error::InvalidProbability(e));
    }

    Ok(())
}

//=================//
// Quality Letters //
//=================//

/// A read stored as base calls paired with their quality values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QualityLetters(pub Vec<QualityLetter>);

impl QualityLetters {
    /// Pairs the bases of a sequence line with the decoded characters of its
    /// quality line.
    pub fn decode(sequence: &[u8], quality: &[u8], encoding: QualityEncoding) -> Result<Self, Error> {
        if sequence.len() != quality.len() {
            return Err(Error::LengthMismatch {
                sequence: sequence.len(),
                quality: quality.len(),
            });
        }

        sequence
            .iter()
            .zip(quality)
            .map(|(&letter, &c)| encoding.decode(c).map(|q| QualityLetter { letter, q }))
            .collect::<Result<Vec<_>, _>>()
            .map(QualityLetters)
    }

    /// Encodes the quality values as a quality line.
    pub fn quality_line(&self, encoding: QualityEncoding) -> Vec<u8> {
        self.0.iter().map(|ql| encoding.encode(ql.q)).collect()
    }
}

impl Scorer for QualityLetters {
    type Error = Error;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.0.len()
    }

    fn e_at(&self, i: usize) -> f64 {
        self.0[i].q.probability()
    }

    fn set_e(&mut self, i: usize, e: f64) -> Result<(), Self::Error> {
        check_write(i, e, self.end())?;
        self.0[i].q = Phred::from_probability(e);
        Ok(())
    }

    fn slice(&mut self) -> Slice<'_> {
        Slice::Letters(&mut self.0)
    }
}

//========//
// Phreds //
//========//

/// A run of bare Phred quality values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Phreds(pub Vec<Phred>);

impl Phreds {
    /// Decodes a quality line.
    pub fn decode(quality: &[u8], encoding: QualityEncoding) -> Result<Self, Error> {
        quality
            .iter()
            .map(|&c| encoding.decode(c))
            .collect::<Result<Vec<_>, _>>()
            .map(Phreds)
    }

    /// Encodes the quality values as a quality line.
    pub fn quality_line(&self, encoding: QualityEncoding) -> Vec<u8> {
        self.0.iter().map(|&q| encoding.encode(q)).collect()
    }
}

impl Scorer for Phreds {
    type Error = Error;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.0.len()
    }

    fn e_at(&self, i: usize) -> f64 {
        self.0[i].probability()
    }

    fn set_e(&mut self, i: usize, e: f64) -> Result<(), Self::Error> {
        check_write(i, e, self.end())?;
        self.0[i] = Phred::from_probability(e);
        Ok(())
    }

    fn slice(&mut self) -> Slice<'_> {
        Slice::Phreds(&mut self.0)
    }
}

//===============//
// Solexa Scores //
//===============//

/// A run of Solexa-scaled quality values. These can only be reached through
/// their error probabilities.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SolexaScores(pub Vec<Solexa>);

impl SolexaScores {
    /// Creates a new [`SolexaScores`] from raw scores.
    pub fn new(scores: Vec<i8>) -> Self {
        SolexaScores(scores.into_iter().map(Solexa::new).collect())
    }
}

impl Scorer for SolexaScores {
    type Error = Error;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.0.len()
    }

    fn e_at(&self, i: usize) -> f64 {
        self.0[i].probability()
    }

    fn set_e(&mut self, i: usize, e: f64) -> Result<(), Self::Error> {
        check_write(i, e, self.end())?;
        self.0[i] = Solexa::from_probability(e);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_and_encodes_quality_lines() {
        let phreds = Phreds::decode(b"!+5?I", QualityEncoding::Sanger).unwrap();
        assert_eq!(
            phreds.0,
            vec![Phred::new(0), Phred::new(10), Phred::new(20), Phred::new(30), Phred::new(40)]
        );
        assert_eq!(phreds.quality_line(QualityEncoding::Sanger), b"!+5?I".to_vec());
        assert_eq!(phreds.quality_line(QualityEncoding::Illumina1Point3), b"@JT^h".to_vec());
    }

    #[test]
    fn it_rejects_mismatched_lines() {
        let err = QualityLetters::decode(b"ACGT", b"III", QualityEncoding::Sanger).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                sequence: 4,
                quality: 3
            }
        );

        let err = QualityLetters::decode(b"AC", b"I ", QualityEncoding::Sanger).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidScore {
                byte: b' ',
                encoding: QualityEncoding::Sanger
            }
        );
    }

    #[test]
    fn it_sets_qualities_through_probabilities() {
        let mut letters = QualityLetters::decode(b"AC", b"II", QualityEncoding::Sanger).unwrap();
        letters.set_e(1, 0.001).unwrap();
        assert_eq!(letters.0[1].q, Phred::new(30));
        assert_eq!(letters.0[1].letter, b'C');

        assert_eq!(
            letters.set_e(2, 0.1),
            Err(Error::OutOfRange {
                index: 2,
                start: 0,
                end: 2
            })
        );
        assert_eq!(letters.set_e(0, 1.5), Err(Error::InvalidProbability(1.5)));
        assert!(matches!(
            letters.set_e(0, f64::NAN),
            Err(Error::InvalidProbability(_))
        ));
    }

    #[test]
    fn it_only_exposes_known_layouts() {
        assert!(matches!(Phreds::default().slice(), Slice::Phreds(_)));
        assert!(matches!(QualityLetters::default().slice(), Slice::Letters(_)));
        assert!(matches!(SolexaScores::new(vec![10]).slice(), Slice::Other));
    }
}
