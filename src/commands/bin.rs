//! Functionality relating to the `illumina bin` subcommand itself.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use illumina::quality;
use illumina::quality::{CompressionScheme, QualityEncoding, QualityLetters};
use noodles::fastq;
use num_format::{Locale, ToFormattedString};
use tracing::{debug, info};

use crate::utils::args::{Encoding, NumberOfRecords};
use crate::utils::display::RecordCounter;
use crate::utils::formats;

/// Clap arguments for the `illumina bin` subcommand.
#[derive(Args)]
pub struct BinArgs {
    /// Source FASTQ file.
    #[arg(value_name = "FASTQ")]
    src: PathBuf,

    /// Destination FASTQ file.
    #[arg(value_name = "FASTQ")]
    dst: PathBuf,

    /// Bins to use instead of the Illumina eight-level scheme, written as
    /// `lower=value` pairs with ascending lower bounds (for example
    /// `2=6,10=15,20=22,25=27,30=33,35=37,40=40`).
    #[arg(short, long, value_name = "BINS")]
    bins: Option<CompressionScheme>,

    /// Quality score encoding of the source file. The destination is written
    /// with the same encoding.
    #[arg(short, long, value_enum, default_value_t = Encoding::Sanger)]
    encoding: Encoding,

    /// Bin only the first `n` records in the file.
    #[arg(short, long, value_name = "USIZE")]
    num_records: Option<usize>,
}

/// Bins the qualities of a single record in place.
pub fn bin_record(
    record: &mut fastq::Record,
    scheme: Option<&CompressionScheme>,
    encoding: QualityEncoding,
) -> anyhow::Result<()> {
    let mut letters = QualityLetters::decode(record.sequence(), record.quality_scores(), encoding)?;
    quality::bin_compress(&mut letters, scheme)?;
    *record.quality_scores_mut() = letters.quality_line(encoding);

    Ok(())
}

/// Main function for the `illumina bin` subcommand.
pub fn bin(args: BinArgs) -> anyhow::Result<()> {
    info!("Starting bin subcommand.");

    let src = args.src;
    let dst = args.dst;
    let encoding = QualityEncoding::from(args.encoding);
    let num_records = NumberOfRecords::from(args.num_records);

    match &args.bins {
        Some(scheme) => debug!("Using custom bins: {:?}", scheme),
        None => debug!("Using the Illumina eight-level bins."),
    }
    debug!("Quality encoding: {}", encoding);

    let mut reader = formats::fastq::reader(&src)
        .with_context(|| format!("opening FASTQ file: {}", src.display()))?;
    let mut writer = formats::fastq::writer(&dst)
        .with_context(|| format!("creating FASTQ file: {}", dst.display()))?;

    let mut counter = RecordCounter::default();

    for result in reader.records() {
        let mut record = result.with_context(|| "reading FASTQ record")?;

        bin_record(&mut record, args.bins.as_ref(), encoding).with_context(|| {
            format!(
                "binning record {}",
                String::from_utf8_lossy(record.name())
            )
        })?;
        writer
            .write_record(&record)
            .with_context(|| format!("writing FASTQ file: {}", dst.display()))?;

        counter.inc();
        if counter.time_to_break(&num_records) {
            break;
        }
    }

    info!(
        "Binned {} records.",
        counter.get().to_formatted_string(&Locale::en)
    );

    Ok(())
}
