//! Functionality related to parsing Illumina read metadata.
//!
//! Two read identifier conventions are supported. Before Casava 1.8, all of the
//! metadata lives in the read name:
//!
//! `INSTRUMENT:LANE:TILE:X:Y#MULTIPLEX[/MATE]`
//!
//! From Casava 1.8 onwards, the name and the description each carry part of it:
//!
//! `INSTRUMENT:RUN:FLOWCELL:LANE:TILE:X:Y MATE:FILTERED:CONTROL:TAG`
//!
//! ```
//! use illumina::metadata::{Convention, Metadata};
//!
//! let metadata = "@EAS139:136:FC706VJ:2:2104:15343:197393 1:Y:18:ATCACG"
//!     .parse::<Metadata>()
//!     .unwrap();
//! assert_eq!(metadata.convention, Convention::Casava);
//! assert_eq!(metadata.flow_cell, "FC706VJ");
//! assert!(metadata.bad_read);
//! ```

use std::error;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

mod identifier;
mod reads;

pub use identifier::{Identifier, ReadName};
pub use reads::parse;

//================//
// Metadata Error //
//================//

/// An error raised while parsing an identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The identifier does not have the structure of either convention.
    BadIdentifier,

    /// The multiplex tag holds characters other than DNA bases.
    BadTag,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadIdentifier => write!(f, "unable to parse identifier"),
            Error::BadTag => write!(f, "illegal multiplex tag"),
        }
    }
}

impl error::Error for Error {}

//============//
// Convention //
//============//

/// The identifier convention a read name follows.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// No convention could be established.
    #[default]
    Undefined,

    /// Read names produced before Casava 1.8 (Illumina 1.4 to 1.7).
    PreCasava,

    /// Read names produced by Casava 1.8 and later.
    Casava,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Undefined => write!(f, "undefined"),
            Convention::PreCasava => write!(f, "pre-casava"),
            Convention::Casava => write!(f, "casava"),
        }
    }
}

//==========//
// Metadata //
//==========//

/// The location of a cluster within a tile.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Coordinate {
    /// The x coordinate of the cluster.
    pub x: i64,

    /// The y coordinate of the cluster.
    pub y: i64,
}

/// Sample multiplexing information.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Multiplex {
    /// The numeric index of the sample, -1 if not valid.
    pub index: i8,

    /// The index sequence of the sample, empty if not valid.
    pub tag: String,
}

/// Metadata carried in an Illumina read identifier.
///
/// Integer fields that were present but empty in the identifier hold -1.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Metadata {
    /// The identifier convention the metadata was parsed from.
    pub convention: Convention,

    /// The unique instrument name.
    pub instrument: String,

    /// The run id, -1 if not valid.
    pub run: i64,

    /// The flow cell id, empty before Casava 1.8.
    pub flow_cell: String,

    /// The flow cell lane.
    pub lane: i8,

    /// The tile number within the flow cell lane.
    pub tile: i64,

    /// The location of the cluster within the tile.
    pub coordinate: Coordinate,

    /// The member of a pair, 1 or 2 for paired reads and 0 when unspecified.
    pub mate: i8,

    /// Whether the read failed the instrument's filter.
    pub bad_read: bool,

    /// 0 when none of the control bits are on, otherwise an even number, -1 if
    /// not valid.
    pub control_bits: i64,

    /// Multiplexing information.
    pub multiplex: Multiplex,
}

/// Parses a whole FASTQ header line. A leading `@` is ignored, the text up to
/// the first whitespace is the read name and the rest is the description.
impl FromStr for Metadata {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('@').unwrap_or(s);

        let (name, description) = match s.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((name, description)) => (name, description.trim()),
            None => (s, ""),
        };

        parse(&ReadName::new(name, description))
    }
}
