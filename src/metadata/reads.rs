//! Parsing of the pre-Casava and Casava read identifier conventions.

use std::num::ParseIntError;
use std::str::FromStr;

use super::{Convention, Coordinate, Error, Identifier, Metadata, Multiplex};

/// Parses the metadata carried in the name and description of `record`.
///
/// A name containing `#` is taken to follow the pre-Casava convention, any
/// other name the Casava 1.8 convention. An error is returned if the input
/// does not conform to the convention.
pub fn parse<I>(record: &I) -> Result<Metadata, Error>
where
    I: Identifier + ?Sized,
{
    let name = record.name();
    if name.contains('#') {
        pre_casava(name)
    } else {
        casava(name, record.description())
    }
}

/// Parses an integer field. Empty fields hold -1.
fn parse_int<T>(field: &str) -> Result<T, ParseIntError>
where
    T: FromStr<Err = ParseIntError> + From<i8>,
{
    if field.is_empty() {
        return Ok(T::from(-1));
    }

    field.parse()
}

fn numeric<T>(field: &str) -> Result<T, Error>
where
    T: FromStr<Err = ParseIntError> + From<i8>,
{
    parse_int(field).map_err(|_| Error::BadIdentifier)
}

fn instrument(field: &str) -> Result<String, Error> {
    if field.is_empty() {
        return Err(Error::BadIdentifier);
    }

    Ok(field.to_string())
}

fn is_dna(tag: &str) -> bool {
    tag.bytes()
        .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't'))
}

// @HWUSI-EAS100R:6:73:941:1973#0/1
//
//  HWUSI-EAS100R   the unique instrument name
//  6               flowcell lane
//  73              tile number within the flowcell lane
//  941             'x'-coordinate of the cluster within the tile
//  1973            'y'-coordinate of the cluster within the tile
//  #0              index number (0 for no indexing) or index sequence
//  /1              the member of a pair, /1 or /2 (paired-end or mate-pair reads only)
fn is_pre_casava_separator(c: char) -> bool {
    matches!(c, ':' | '#' | '/')
}

fn pre_casava(name: &str) -> Result<Metadata, Error> {
    let fields: Vec<&str> = name.split(is_pre_casava_separator).collect();
    if fields.len() < 6 {
        return Err(Error::BadIdentifier);
    }

    let mut metadata = Metadata {
        convention: Convention::PreCasava,
        instrument: instrument(fields[0])?,
        run: -1,
        lane: numeric(fields[1])?,
        tile: numeric(fields[2])?,
        coordinate: Coordinate {
            x: numeric(fields[3])?,
            y: numeric(fields[4])?,
        },
        control_bits: -1,
        ..Default::default()
    };

    metadata.multiplex = match parse_int::<i8>(fields[5]) {
        Ok(index) => Multiplex {
            index,
            tag: String::new(),
        },
        Err(_) if is_dna(fields[5]) => Multiplex {
            index: -1,
            tag: fields[5].to_string(),
        },
        Err(_) => return Err(Error::BadTag),
    };

    if let Some(mate) = fields.get(6) {
        metadata.mate = numeric(mate)?;
    }

    Ok(metadata)
}

// @EAS139:136:FC706VJ:2:2104:15343:197393 1:Y:18:ATCACG
//
//  EAS139   the unique instrument name
//  136      the run id
//  FC706VJ  the flowcell id
//  2        flowcell lane
//  2104     tile number within the flowcell lane
//  15343    'x'-coordinate of the cluster within the tile
//  197393   'y'-coordinate of the cluster within the tile
//  1        the member of a pair, 1 or 2 (paired-end or mate-pair reads only)
//  Y        Y if the read fails filter (read is bad), N otherwise
//  18       0 when none of the control bits are on, otherwise it is an even number
//  ATCACG   index sequence
fn casava(name: &str, description: &str) -> Result<Metadata, Error> {
    let name_fields: Vec<&str> = name.split(':').collect();
    let description_fields: Vec<&str> = if description.is_empty() {
        Vec::new()
    } else {
        description.split(':').collect()
    };

    if name_fields.len() != 7 || !matches!(description_fields.len(), 0 | 4) {
        return Err(Error::BadIdentifier);
    }

    // The tag is checked before any of the numeric fields.
    if let Some(tag) = description_fields.get(3) {
        if !is_dna(tag) {
            return Err(Error::BadTag);
        }
    }

    let mut metadata = Metadata {
        convention: Convention::Casava,
        instrument: instrument(name_fields[0])?,
        run: numeric(name_fields[1])?,
        flow_cell: name_fields[2].to_string(),
        lane: numeric(name_fields[3])?,
        tile: numeric(name_fields[4])?,
        coordinate: Coordinate {
            x: numeric(name_fields[5])?,
            y: numeric(name_fields[6])?,
        },
        control_bits: -1,
        multiplex: Multiplex {
            index: -1,
            tag: String::new(),
        },
        ..Default::default()
    };

    if let [mate, filtered, control_bits, tag] = description_fields.as_slice() {
        metadata.mate = numeric(mate)?;
        metadata.bad_read = matches!(*filtered, "Y" | "y");
        metadata.control_bits = numeric(control_bits)?;
        metadata.multiplex.tag = tag.to_string();
    }

    Ok(metadata)
}
