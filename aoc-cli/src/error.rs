//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No input file exists for a selected solver
    #[error("No input for {year}/{day:02}: expected {}", path.display())]
    MissingInput { year: u16, day: u8, path: PathBuf },

    /// Registration error
    #[error("Registration error")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Parsing or solving failed for one solver
    #[error("{year}/{day:02} failed")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },
}

impl CliError {
    /// Attach the year/day being run to a solver error
    pub fn solver(year: u16, day: u8) -> impl FnOnce(aoc_solver::SolverError) -> CliError {
        move |source| CliError::Solver { year, day, source }
    }
}
