//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the solver framework, and reads its input through a
//! [`LineHandler`](aoc_solver::LineHandler) that accumulates state line by line.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
