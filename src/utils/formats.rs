//! Utilities related to bioinformatics file formats.

use std::fmt;
use std::path::Path;

pub mod fastq;

/// The file formats `illumina` knows how to open.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BioinformaticsFileFormat {
    /// An uncompressed FASTQ file.
    FASTQ,

    /// A gzipped FASTQ file.
    FASTQ_GZ,
}

impl BioinformaticsFileFormat {
    /// Detects the file format from the extension(s) of `path`.
    pub fn try_detect<P>(path: P) -> Option<Self>
    where
        P: AsRef<Path>,
    {
        let name = path.as_ref().file_name()?.to_str()?.to_ascii_lowercase();

        if name.ends_with(".fastq.gz") || name.ends_with(".fq.gz") {
            Some(Self::FASTQ_GZ)
        } else if name.ends_with(".fastq") || name.ends_with(".fq") {
            Some(Self::FASTQ)
        } else {
            None
        }
    }
}

impl fmt::Display for BioinformaticsFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FASTQ => write!(f, "FASTQ"),
            Self::FASTQ_GZ => write!(f, "gzipped FASTQ"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_detects_fastq_files() {
        assert_eq!(
            BioinformaticsFileFormat::try_detect("reads.fastq"),
            Some(BioinformaticsFileFormat::FASTQ)
        );
        assert_eq!(
            BioinformaticsFileFormat::try_detect("/tmp/reads.FQ"),
            Some(BioinformaticsFileFormat::FASTQ)
        );
        assert_eq!(
            BioinformaticsFileFormat::try_detect("reads.fq.gz"),
            Some(BioinformaticsFileFormat::FASTQ_GZ)
        );
        assert_eq!(BioinformaticsFileFormat::try_detect("reads.bam"), None);
        assert_eq!(BioinformaticsFileFormat::try_detect("reads"), None);
    }
}
