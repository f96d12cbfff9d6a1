//! Utilities related to displaying things.

use num_format::Locale;
use num_format::ToFormattedString;
use tracing::info;

use crate::utils::args::NumberOfRecords;

/// Utility struct used to uniformly count and report the number of records processed.
pub struct RecordCounter {
    /// The number of records processed.
    count: usize,

    /// The number of records to log every.
    log_every: usize,
}

impl Default for RecordCounter {
    fn default() -> Self {
        RecordCounter {
            count: 0,
            log_every: 1_000_000,
        }
    }
}

impl RecordCounter {
    /// Gets the current number of records counted via a copy.
    pub fn get(&self) -> usize {
        self.count
    }

    /// Increments the counter and reports the number of records processed (if
    /// appropriate).
    pub fn inc(&mut self) {
        self.count += 1;

        if self.count % self.log_every == 0 {
            info!(
                "  [*] Processed {} records.",
                self.count.to_formatted_string(&Locale::en),
            );
        }
    }

    /// A utility method that indicates whether a loop should break based on if
    /// the counter is greater than or equal to some limit.
    pub fn time_to_break(&self, limit: &NumberOfRecords) -> bool {
        match limit {
            NumberOfRecords::Some(v) => self.count >= *v,
            NumberOfRecords::All => false,
        }
    }
}
