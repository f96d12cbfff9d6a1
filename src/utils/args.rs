//! Utilities related to the parsing of arguments.

use std::fmt::Display;

use illumina::quality::QualityEncoding;
use tracing::debug;

//===================//
// Number of Records //
//===================//

/// Utility enum to designate whether we are reviewing all records in the file
/// or just some of them.
pub enum NumberOfRecords {
    /// Designates that we should review _all_ of the records in the file.
    All,

    /// Designates that we should review _some_ of the records in the file. The
    /// exact count of records is stored in the `usize`.
    Some(usize),
}

impl From<Option<usize>> for NumberOfRecords {
    fn from(num_records: Option<usize>) -> Self {
        match num_records {
            Some(n) => {
                debug!("Reading a maximum of {} records.", n);
                NumberOfRecords::Some(n)
            }
            None => {
                debug!("Reading all available records.");
                NumberOfRecords::All
            }
        }
    }
}

//==================//
// Quality Encoding //
//==================//

/// The quality score encoding of a FASTQ file.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Encoding {
    /// Sanger encoding, also used by Illumina 1.8 and later (Phred+33).
    Sanger,

    /// Illumina 1.3 to 1.7 encoding (Phred+64).
    #[value(name = "illumina-1.3")]
    Illumina1Point3,
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sanger => write!(f, "sanger"),
            Self::Illumina1Point3 => write!(f, "illumina-1.3"),
        }
    }
}

impl From<Encoding> for QualityEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Sanger => QualityEncoding::Sanger,
            Encoding::Illumina1Point3 => QualityEncoding::Illumina1Point3,
        }
    }
}
