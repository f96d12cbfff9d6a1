//! Binning of quality-bearing containers.

use serde::Serialize;

use super::{CompressionScheme, Phred, DEFAULT_COMPRESSION};

/// A base call paired with its quality value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct QualityLetter {
    /// The base call.
    pub letter: u8,

    /// The quality of the base call.
    pub q: Phred,
}

/// Direct access to the quality storage of a [`Scorer`].
pub enum Slice<'a> {
    /// Base calls paired with their quality values.
    Letters(&'a mut [QualityLetter]),

    /// Bare quality values.
    Phreds(&'a mut [Phred]),

    /// Storage that is not directly accessible, or has no known layout.
    Other,
}

/// Anything carrying a quality value per position.
///
/// Qualities are exchanged as error probabilities so that implementations are
/// free to store them on whichever scale they like.
pub trait Scorer {
    /// The error reported when a quality cannot be set.
    type Error;

    /// The first position carrying a quality.
    fn start(&self) -> usize;

    /// One past the last position carrying a quality.
    fn end(&self) -> usize;

    /// The error probability at position `i`.
    fn e_at(&self, i: usize) -> f64;

    /// Sets the error probability at position `i`.
    fn set_e(&mut self, i: usize, e: f64) -> Result<(), Self::Error>;

    /// Exposes the underlying quality storage, if its layout is one of the
    /// [`Slice`] shapes. The default exposes nothing.
    fn slice(&mut self) -> Slice<'_> {
        Slice::Other
    }
}

/// Lossily compresses the qualities of `scorer` in place according to
/// `scheme`, or [`DEFAULT_COMPRESSION`] if no scheme is given.
///
/// Scorers exposing their storage through [`Scorer::slice`] are rewritten
/// directly. All others are walked position by position through their error
/// probabilities; the first error returned by [`Scorer::set_e`] stops the walk
/// and is returned as is, leaving the positions already written binned.
pub fn bin_compress<S>(scorer: &mut S, scheme: Option<&CompressionScheme>) -> Result<(), S::Error>
where
    S: Scorer + ?Sized,
{
    let scheme = scheme.unwrap_or(&DEFAULT_COMPRESSION);

    match scorer.slice() {
        Slice::Letters(letters) => {
            for ql in letters.iter_mut() {
                ql.q = scheme[ql.q];
            }
            Ok(())
        }
        Slice::Phreds(phreds) => {
            for q in phreds.iter_mut() {
                *q = scheme[*q];
            }
            Ok(())
        }
        Slice::Other => slow_compression(scorer, scheme),
    }
}

fn slow_compression<S>(scorer: &mut S, scheme: &CompressionScheme) -> Result<(), S::Error>
where
    S: Scorer + ?Sized,
{
    for i in scorer.start()..scorer.end() {
        let q = Phred::from_probability(scorer.e_at(i));
        scorer.set_e(i, scheme[q].probability())?;
    }

    Ok(())
}
