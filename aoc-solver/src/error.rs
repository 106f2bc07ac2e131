//! Error types for the solver library

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Reason a single input line (or the end of the input) was rejected by a line handler
#[derive(Debug, Error)]
pub enum LineError {
    /// The line does not match any record shape the handler understands
    #[error("malformed line: {0}")]
    Malformed(String),
    /// A token where a number was expected could not be parsed
    #[error("invalid number '{token}'")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// The record is valid on its own but appears out of the required order
    #[error("out of sequence: {0}")]
    Sequencing(String),
    /// Data the handler needs never appeared
    #[error("missing data: {0}")]
    Missing(String),
    /// A computation over already accepted records failed
    #[error("computation failed")]
    Compute(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LineError {
    /// Wrap any error raised while computing over accumulated state
    pub fn compute<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LineError::Compute(Box::new(error))
    }
}

/// Error type for turning an input stream into shared data
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be opened
    #[error("cannot open input {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading failed part way through the stream
    #[error("failed to read input after line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    /// A line handler rejected a line
    #[error("parser error on line {number} '{text}'")]
    Line {
        number: usize,
        text: String,
        #[source]
        source: LineError,
    },
    /// The stream ended but the accumulated state could not be finalized
    #[error("input is incomplete")]
    Incomplete(#[source] LineError),
}

impl ParseError {
    /// Line number responsible for the error, when one is known
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseError::Line { number, .. } => Some(*number),
            ParseError::Read { line, .. } => Some(*line + 1),
            _ => None,
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    pub fn failed<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(error))
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day combination: {0}/{1}")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported range
    #[error("Cannot register year {0} day {1}: outside supported range")]
    InvalidYearDay(u16, u8),
}
