//! Utilities related to opening and manipulating FASTQ files.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::bail;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use noodles::fastq;

use super::BioinformaticsFileFormat;

/// Attempts to open a FASTQ file from a given source.
pub fn reader<P>(src: P) -> anyhow::Result<fastq::Reader<Box<dyn BufRead>>>
where
    P: AsRef<Path>,
{
    let path = src.as_ref();

    match BioinformaticsFileFormat::try_detect(path) {
        Some(BioinformaticsFileFormat::FASTQ_GZ) => {
            let reader = File::open(path)
                .map(MultiGzDecoder::new)
                .map(BufReader::new)?;
            Ok(fastq::Reader::new(Box::new(reader)))
        }
        Some(BioinformaticsFileFormat::FASTQ) => {
            let reader = File::open(path).map(BufReader::new)?;
            Ok(fastq::Reader::new(Box::new(reader)))
        }
        None => bail!(
            "Not able to determine filetype for {}, expected a FASTQ file",
            path.display()
        ),
    }
}

/// Attempts to create a FASTQ file at a given destination.
pub fn writer<P>(dst: P) -> anyhow::Result<fastq::Writer<Box<dyn Write>>>
where
    P: AsRef<Path>,
{
    let path = dst.as_ref();

    match BioinformaticsFileFormat::try_detect(path) {
        Some(BioinformaticsFileFormat::FASTQ_GZ) => {
            let writer = File::create(path)
                .map(|f| GzEncoder::new(f, Compression::default()))
                .map(BufWriter::new)?;
            Ok(fastq::Writer::new(Box::new(writer)))
        }
        Some(BioinformaticsFileFormat::FASTQ) => {
            let writer = File::create(path).map(BufWriter::new)?;
            Ok(fastq::Writer::new(Box::new(writer)))
        }
        None => bail!(
            "Not able to determine filetype for {}, expected a FASTQ file",
            path.display()
        ),
    }
}
