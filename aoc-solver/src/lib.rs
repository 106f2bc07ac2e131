//! Advent of Code Solver Library
//!
//! A small framework for puzzle units that read their input one line at a time,
//! accumulate unit-local state, and produce a single answer per part.
//!
//! # Overview
//!
//! This library provides:
//! - [`LineSource`]: a finite, non-restartable sequence of numbered input lines
//! - [`LineHandler`]: the per-unit accumulator driven by [`LineSource::feed`]
//! - A trait-based interface for defining solvers with one or more parts
//! - A registry of solver factories, populated by hand or from `inventory` plugins
//! - An error taxonomy that keeps the offending line number and text attached to
//!   every parse failure
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, Line, LineError, LineHandler, LineSource, ParseError, SolveError, Solver,
//!     SolverRegistryBuilder, register_solver,
//! };
//! use std::io::BufRead;
//!
//! #[derive(Default)]
//! struct Numbers(Vec<i64>);
//!
//! impl LineHandler for Numbers {
//!     type Output = Vec<i64>;
//!
//!     fn handle(&mut self, line: &Line) -> Result<(), LineError> {
//!         let n = line.text.trim().parse::<i64>().map_err(|source| LineError::InvalidNumber {
//!             token: line.text.clone(),
//!             source,
//!         })?;
//!         self.0.push(n);
//!         Ok(())
//!     }
//!
//!     fn finish(self) -> Result<Vec<i64>, LineError> {
//!         Ok(self.0)
//!     }
//! }
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData = Vec<i64>;
//!
//!     fn parse<R: BufRead>(source: LineSource<R>) -> Result<Vec<i64>, ParseError> {
//!         source.feed(Numbers::default())
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! register_solver!(builder, MyDay1, 2023, 1);
//! let registry = builder.build();
//!
//! let source = LineSource::from_text("1\n2\n3").boxed();
//! let mut solver = registry.create_solver(2023, 1, source).unwrap();
//! assert_eq!(solver.solve(1).unwrap().sentence(), "The sum total is 6");
//! ```
//!
//! # Plugin System and Derive Macros
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! pub struct Solver;
//! ```
//!
//! `AocSolver` implements [`Solver`] by dispatching each part to a [`PartSolver`] impl;
//! `AutoRegisterSolver` submits a [`SolverPlugin`] so that
//! [`SolverRegistryBuilder::register_all_plugins`] can find it.

mod error;
mod instance;
mod lines;
mod registry;
mod solver;

// Re-export public API
pub use error::{LineError, ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use lines::{InputSource, Line, LineHandler, LineSource};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
