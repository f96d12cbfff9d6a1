//! Functionality relating to the `illumina parse` subcommand itself.

use std::collections::BTreeSet;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use illumina::metadata;
use illumina::metadata::{Convention, Identifier, Metadata, ReadName};
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use tracing::{debug, info};

use crate::utils::args::NumberOfRecords;
use crate::utils::display::RecordCounter;
use crate::utils::formats;

/// Clap arguments for the `illumina parse` subcommand.
#[derive(Args)]
pub struct ParseArgs {
    /// Source FASTQ file.
    #[arg(value_name = "FASTQ")]
    src: PathBuf,

    /// Examine only the first `n` records in the file.
    #[arg(short, long, value_name = "USIZE")]
    num_records: Option<usize>,

    /// Print the metadata of every parsable record as JSON lines instead of a
    /// summary.
    #[arg(long)]
    records: bool,
}

/// Counts of what was found while parsing read names.
#[derive(Debug, Default, Serialize)]
pub struct RecordMetrics {
    /// The total number of records examined.
    pub total_records: usize,

    /// Records following the pre-Casava convention.
    pub pre_casava: usize,

    /// Records following the Casava 1.8 convention.
    pub casava: usize,

    /// Records that failed the instrument's filter.
    pub bad_reads: usize,

    /// Records whose name did not follow either convention.
    pub bad_identifier: usize,

    /// Records with an illegal multiplex tag.
    pub bad_tag: usize,

    /// Records whose name was not valid UTF-8.
    pub not_utf8: usize,
}

/// The summary printed by the `illumina parse` subcommand.
#[derive(Debug, Default, Serialize)]
pub struct ParseReport {
    /// Counts of what was found.
    pub records: RecordMetrics,

    /// Every instrument name seen.
    pub instruments: BTreeSet<String>,

    /// Every flow cell id seen.
    pub flowcells: BTreeSet<String>,
}

impl ParseReport {
    /// Updates the report with the outcome of parsing one read name.
    pub fn update(&mut self, result: &Result<Metadata, metadata::Error>) {
        match result {
            Ok(m) => {
                match m.convention {
                    Convention::PreCasava => self.records.pre_casava += 1,
                    Convention::Casava => self.records.casava += 1,
                    Convention::Undefined => {}
                }

                if m.bad_read {
                    self.records.bad_reads += 1;
                }

                if !self.instruments.contains(&m.instrument) {
                    self.instruments.insert(m.instrument.clone());
                }

                if !m.flow_cell.is_empty() && !self.flowcells.contains(&m.flow_cell) {
                    self.flowcells.insert(m.flow_cell.clone());
                }
            }
            Err(metadata::Error::BadIdentifier) => self.records.bad_identifier += 1,
            Err(metadata::Error::BadTag) => self.records.bad_tag += 1,
        }
    }
}

/// Main function for the `illumina parse` subcommand.
pub fn parse(args: ParseArgs) -> anyhow::Result<()> {
    info!("Starting parse subcommand.");

    let src = args.src;
    let num_records = NumberOfRecords::from(args.num_records);
    let mut reader = formats::fastq::reader(&src)
        .with_context(|| format!("opening FASTQ file: {}", src.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut report = ParseReport::default();
    let mut counter = RecordCounter::default();

    for result in reader.records() {
        let record = result.with_context(|| "reading FASTQ record")?;

        match ReadName::try_from(&record) {
            Ok(read_name) => {
                let parsed = metadata::parse(&read_name);

                if args.records {
                    match &parsed {
                        Ok(m) => {
                            serde_json::to_writer(&mut out, m)?;
                            writeln!(out)?;
                        }
                        Err(e) => debug!("Skipping read {}: {}", read_name.name(), e),
                    }
                }

                report.update(&parsed);
            }
            Err(_) => report.records.not_utf8 += 1,
        }

        counter.inc();
        if counter.time_to_break(&num_records) {
            break;
        }
    }

    info!(
        "Processed {} records.",
        counter.get().to_formatted_string(&Locale::en)
    );
    report.records.total_records = counter.get();

    if !args.records {
        let output = serde_json::to_string_pretty(&report)?;
        writeln!(out, "{}", output)?;
    }

    Ok(())
}
