//! Loading course descriptions from the line-oriented `C`/`H` text format.

pub mod domain;
mod normalizer;
mod parser;
mod writer;

pub use domain::{Golfer, GolferError, GolfCourse, Hole, MAX_HOLES, MAX_HOLE_PAR};
pub use writer::write_course;

use parser::{CourseHeader, CourseRecord};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// What to do when the header's hole count disagrees with the hole records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleCountPolicy {
    /// Reject the file with [`CourseParseError::HoleCountMismatch`].
    #[default]
    Strict,
    /// Keep the declared count and the holes as found.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub hole_count: HoleCountPolicy,
}

impl ParseOptions {
    pub fn with_hole_count(hole_count: HoleCountPolicy) -> Self {
        Self { hole_count }
    }
}

/// Why a single `C` or `H` record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordDefect {
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("{field} is not an integer: '{value}'")]
    NotAnInteger { field: &'static str, value: String },
    #[error("{field} must be at least 1, found {value}")]
    NotPositive { field: &'static str, value: i64 },
    #[error("{field} is too large: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must not contain commas or line breaks")]
    Separator { field: &'static str },
}

/// Why a [`GolfCourse`] could not be assembled from its parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseDefect {
    #[error("invalid course header: {0}")]
    Header(#[from] RecordDefect),
    #[error("a course needs at least one hole")]
    NoHoles,
}

#[derive(Debug, thiserror::Error)]
pub enum CourseParseError {
    #[error("course file unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),
    #[error("course file is not readable text: {0}")]
    Unreadable(#[from] csv::Error),
    #[error("malformed course header on line {line}: {reason}")]
    MalformedHeader { line: u64, reason: RecordDefect },
    #[error("malformed hole record on line {line}: {reason}")]
    MalformedHole { line: u64, reason: RecordDefect },
    #[error("course file has no 'C' header record")]
    MissingHeader,
    #[error("course file has a header but no 'H' hole records")]
    NoHoles,
    #[error("course header declares {declared} holes but {found} hole records were found")]
    HoleCountMismatch { declared: u32, found: usize },
}

/// Turns course text into a [`GolfCourse`].
///
/// Lines tagged `C` set the header (the last one wins), lines tagged `H` append a
/// hole in file order, and anything else is ignored. The first malformed `C` or
/// `H` record aborts the parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseParser {
    options: ParseOptions,
}

impl CourseParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn parse(&self, text: &str) -> Result<GolfCourse, CourseParseError> {
        self.from_reader(text.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<GolfCourse, CourseParseError> {
        let file = std::fs::File::open(path)?;
        self.from_reader(file)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<GolfCourse, CourseParseError> {
        let records = parser::parse_records(reader)?;
        self.assemble(records)
    }

    fn assemble(&self, records: Vec<CourseRecord>) -> Result<GolfCourse, CourseParseError> {
        let mut header: Option<(u64, CourseHeader)> = None;
        let mut holes = Vec::new();

        for record in records {
            match record {
                CourseRecord::Header { line, header: next } => {
                    if let Some((_, previous)) = header.replace((line, next)) {
                        warn!(line, replaced = %previous.name, "course header redefined, keeping the later one");
                    }
                }
                CourseRecord::Hole { hole, .. } => holes.push(hole),
            }
        }

        let (
            header_line,
            CourseHeader {
                name,
                par,
                hole_count,
            },
        ) = header.ok_or(CourseParseError::MissingHeader)?;

        if self.options.hole_count == HoleCountPolicy::Strict && hole_count as usize != holes.len()
        {
            return Err(CourseParseError::HoleCountMismatch {
                declared: hole_count,
                found: holes.len(),
            });
        }

        let course = GolfCourse::new(name, hole_count, par, holes).map_err(|defect| match defect {
            CourseDefect::NoHoles => CourseParseError::NoHoles,
            CourseDefect::Header(reason) => CourseParseError::MalformedHeader {
                line: header_line,
                reason,
            },
        })?;

        info!(course = %course.name(), holes = course.holes().len(), par, "course loaded");
        Ok(course)
    }
}

impl FromStr for GolfCourse {
    type Err = CourseParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        CourseParser::default().parse(text)
    }
}
