//! Access to the name and description of a read.

use std::str;

use noodles::fastq;

/// Anything with a read name and description.
pub trait Identifier {
    /// The read name, up to the first whitespace of the header line.
    fn name(&self) -> &str;

    /// The remainder of the header line, empty if there is none.
    fn description(&self) -> &str;
}

/// A borrowed read name and description.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReadName<'a> {
    name: &'a str,
    description: &'a str,
}

impl<'a> ReadName<'a> {
    /// Creates a new [`ReadName`].
    pub fn new(name: &'a str, description: &'a str) -> Self {
        ReadName { name, description }
    }
}

impl Identifier for ReadName<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }
}

impl<'a> TryFrom<&'a fastq::Record> for ReadName<'a> {
    type Error = str::Utf8Error;

    fn try_from(record: &'a fastq::Record) -> Result<Self, Self::Error> {
        Ok(ReadName::new(
            str::from_utf8(record.name())?,
            str::from_utf8(record.description())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_borrows_from_fastq_records() {
        let mut record =
            fastq::Record::new("EAS139:136:FC706VJ:2:2104:15343:197393", "ACGT", "IIII");
        *record.description_mut() = b"1:Y:18:ATCACG".to_vec();

        let read_name = ReadName::try_from(&record).unwrap();
        assert_eq!(read_name.name(), "EAS139:136:FC706VJ:2:2104:15343:197393");
        assert_eq!(read_name.description(), "1:Y:18:ATCACG");
    }

    #[test]
    fn it_rejects_names_that_are_not_utf8() {
        let record = fastq::Record::new(vec![0xff, 0xfe], "A", "I");
        assert!(ReadName::try_from(&record).is_err());
    }
}
