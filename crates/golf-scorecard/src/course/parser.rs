use super::domain::{check_header, Hole};
use super::normalizer::normalize_token;
use super::{CourseParseError, RecordDefect};
use csv::StringRecord;
use std::io::Read;
use tracing::debug;

const FIELDS_PER_RECORD: usize = 4;
const HEADER_TAG: &str = "C";
const HOLE_TAG: &str = "H";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CourseHeader {
    pub(crate) name: String,
    pub(crate) par: u32,
    pub(crate) hole_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CourseRecord {
    Header { line: u64, header: CourseHeader },
    Hole { line: u64, hole: Hole },
}

/// Reads every `C` and `H` record in file order, stopping at the first malformed one.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CourseRecord>, CourseParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.records() {
        let row = record.map_err(read_failure)?;
        let line = row.position().map_or(0, |position| position.line());

        match row.get(0).map(normalize_token) {
            Some(HEADER_TAG) => {
                let header = parse_header(&row)
                    .map_err(|reason| CourseParseError::MalformedHeader { line, reason })?;
                records.push(CourseRecord::Header { line, header });
            }
            Some(HOLE_TAG) => {
                let hole = parse_hole(&row)
                    .map_err(|reason| CourseParseError::MalformedHole { line, reason })?;
                records.push(CourseRecord::Hole { line, hole });
            }
            _ => debug!(line, "skipping record without a course or hole tag"),
        }
    }

    Ok(records)
}

/// I/O failures mean the source itself could not be read; anything else the
/// reader reports (invalid UTF-8) is about the content.
fn read_failure(error: csv::Error) -> CourseParseError {
    if !error.is_io_error() {
        return CourseParseError::Unreadable(error);
    }
    match error.into_kind() {
        csv::ErrorKind::Io(source) => CourseParseError::SourceUnavailable(source),
        other => CourseParseError::SourceUnavailable(std::io::Error::other(format!("{other:?}"))),
    }
}

fn parse_header(row: &StringRecord) -> Result<CourseHeader, RecordDefect> {
    expect_field_count(row)?;

    let name = row[1].to_string();
    let par = positive_field("par", &row[2])?;
    let hole_count = positive_field("hole_count", &row[3])?;
    check_header(&name, par, hole_count)?;

    Ok(CourseHeader {
        name,
        par,
        hole_count,
    })
}

fn parse_hole(row: &StringRecord) -> Result<Hole, RecordDefect> {
    expect_field_count(row)?;

    let number = positive_field("number", &row[1])?;
    let par = positive_field("par", &row[3])?;

    Hole::new(number, &row[2], par)
}

fn expect_field_count(row: &StringRecord) -> Result<(), RecordDefect> {
    if row.len() != FIELDS_PER_RECORD {
        return Err(RecordDefect::FieldCount(row.len()));
    }
    Ok(())
}

fn positive_field(field: &'static str, raw: &str) -> Result<u32, RecordDefect> {
    let token = normalize_token(raw);
    let value = token
        .parse::<i64>()
        .map_err(|_| RecordDefect::NotAnInteger {
            field,
            value: token.to_string(),
        })?;

    if value < 1 {
        return Err(RecordDefect::NotPositive { field, value });
    }

    u32::try_from(value).map_err(|_| RecordDefect::OutOfRange { field, value })
}
