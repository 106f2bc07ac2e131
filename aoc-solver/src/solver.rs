//! Core solver traits

use crate::error::{ParseError, SolveError};
use crate::lines::LineSource;
use std::io::BufRead;

/// Trait for turning a puzzle's input lines into shared data
///
/// Most implementations hand the source straight to a [`LineHandler`](crate::LineHandler)
/// that accumulates the unit's state one line at a time.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, Line, LineError, LineHandler, LineSource, ParseError};
/// use std::io::BufRead;
///
/// #[derive(Default)]
/// struct Sum(i64);
///
/// impl LineHandler for Sum {
///     type Output = i64;
///
///     fn handle(&mut self, line: &Line) -> Result<(), LineError> {
///         self.0 += line.text.trim().parse::<i64>().map_err(|source| LineError::InvalidNumber {
///             token: line.text.clone(),
///             source,
///         })?;
///         Ok(())
///     }
///
///     fn finish(self) -> Result<i64, LineError> {
///         Ok(self.0)
///     }
/// }
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData = i64;
///
///     fn parse<R: BufRead>(source: LineSource<R>) -> Result<i64, ParseError> {
///         source.feed(Sum::default())
///     }
/// }
///
/// assert_eq!(Day1::parse(LineSource::from_text("1\n2\n3")).unwrap(), 6);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results shared between parts
    type SharedData;

    /// Consume the source and build the shared data
    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError>;
}

/// Trait for solving a specific part of an AOC puzzle.
///
/// The const generic `N` represents the part number (1, 2, etc.).
/// Combined with `#[derive(AocSolver)]` this gives compile-time checking that every
/// advertised part is implemented.
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError>;
}

/// Core trait that all Advent of Code solvers must implement.
///
/// Extends `AocParser` to inherit `SharedData` and `parse()`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, LineSource, ParseError, SolveError, Solver};
/// use std::io::BufRead;
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData = Vec<String>;
///
///     fn parse<R: BufRead>(source: LineSource<R>) -> Result<Vec<String>, ParseError> {
///         source.map(|line| line.map(|l| l.text)).collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Vec<String>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Noun phrase describing the answer, printed as "The {label} is {answer}"
    const ANSWER_LABEL: &'static str = "sum total";

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
