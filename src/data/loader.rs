use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord, Trim};

use super::model::{Reading, ReadingSequence};
use crate::error::{ParseError, PlotterError, Result};

/// Zero-based index of the humidity column.
pub const HUMIDITY_FIELD: usize = 1;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the humidity readings of a CSV file.
///
/// Every row must have at least two fields; the second one is parsed as a
/// base-10 integer. There is no header row. The first bad row aborts the
/// whole load. The file is read in one go and closed before parsing starts.
pub fn load_file(path: &Path) -> Result<ReadingSequence> {
    log::debug!("reading {}", path.display());
    let data = std::fs::read(path).map_err(|e| PlotterError::file_access(path, e))?;
    let readings = read_readings(&data)?;
    log::info!(
        "loaded {} humidity readings from {}",
        readings.len(),
        path.display()
    );
    Ok(readings)
}

/// Parse readings from the raw contents of a CSV file.
pub fn read_readings(data: &[u8]) -> Result<ReadingSequence> {
    // The logger writes "<timestamp>, <humidity>", so fields get trimmed.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(data);

    let mut record = StringRecord::new();
    let mut readings = Vec::new();
    loop {
        let line = next_row_line(data, reader.position())?;
        if !reader.read_record(&mut record).map_err(ParseError::from)? {
            break;
        }
        readings.push(parse_reading(&record, line)?);
    }

    Ok(ReadingSequence::from_readings(readings))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Line number of the row that starts where the reader stopped.
///
/// The csv reader drops empty lines without yielding a record, so an empty
/// line here is reported as a row without fields.
fn next_row_line(data: &[u8], pos: &Position) -> std::result::Result<u64, ParseError> {
    let mut offset = pos.byte() as usize;
    let mut line = pos.line();

    // '\n' of a CRLF the previous record stopped in the middle of
    if offset > 0 && data[offset - 1] == b'\r' && data.get(offset) == Some(&b'\n') {
        offset += 1;
        line += 1;
    }

    match data.get(offset) {
        Some(b'\n' | b'\r') => Err(ParseError::MissingField { line, found: 0 }),
        _ => Ok(line),
    }
}

fn parse_reading(record: &StringRecord, line: u64) -> std::result::Result<Reading, ParseError> {
    let field = record
        .get(HUMIDITY_FIELD)
        .ok_or(ParseError::MissingField {
            line,
            found: record.len(),
        })?;

    field
        .parse::<Reading>()
        .map_err(|source| ParseError::InvalidInteger {
            line,
            value: field.to_string(),
            source,
        })
}
