//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use crate::inputs::{InputDir, open_path};
use aoc_solver::{InputSource, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from a single solved part
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    pub label: &'static str,
    /// Set on the first part run for each solver only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    /// The human readable answer sentence
    pub fn sentence(&self) -> String {
        format!("The {} is {}", self.label, self.answer)
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs selected solvers one after another, stopping at the first failure
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputDir,
    input_file: Option<PathBuf>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputDir::new(config.input_dir.clone()),
            input_file: config.input_file.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file does not exist
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8, PathBuf)> {
        if self.input_file.is_some() {
            return Vec::new();
        }
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day, self.inputs.input_path(w.year, w.day)))
            .collect()
    }

    /// Run every work item in order, handing each solver's results to `on_results`
    ///
    /// A solver's results are only handed over once all of its selected parts succeed.
    /// The first error aborts the run.
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_results: F) -> Result<(), CliError>
    where
        F: FnMut(&[SolverResult]),
    {
        for work in work_items {
            let results = self.run_solver(work)?;
            on_results(&results);
        }
        Ok(())
    }

    fn open(&self, year: u16, day: u8) -> Result<InputSource, CliError> {
        match &self.input_file {
            Some(path) => open_path(path, year, day),
            None => self.inputs.open(year, day),
        }
    }

    fn run_solver(&self, work: &WorkItem) -> Result<Vec<SolverResult>, CliError> {
        let (year, day) = (work.year, work.day);
        log::debug!("Running {}/{:02} parts {:?}", year, day, work.parts);

        let source = self.open(year, day)?;
        let mut solver = self
            .registry
            .create_solver(year, day, source)
            .map_err(CliError::solver(year, day))?;
        let mut parse_duration = Some(solver.parse_duration());

        work.parts
            .clone()
            .map(|part| -> Result<SolverResult, CliError> {
                let result = solver
                    .solve(part)
                    .map_err(|e| CliError::solver(year, day)(e.into()))?;
                Ok(SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: result.duration(),
                    answer: result.answer,
                    label: result.label,
                    parse_duration: parse_duration.take(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc_solver::{LineError, ParseError, SolverError, SolverRegistryBuilder};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn executor(input_dir: &std::path::Path, extra: &[&str]) -> Executor {
        let dir = input_dir.to_string_lossy().into_owned();
        let mut argv = vec!["aoc", "-y", "2023", "--input-dir", dir.as_str()];
        argv.extend_from_slice(extra);
        let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();
        let registry = SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        Executor::new(registry, &config)
    }

    #[test]
    fn test_part_filter_limits_work() {
        let temp = TempDir::new().unwrap();
        let items = executor(temp.path(), &["-p", "2"]).collect_work_items();
        // Day 5 has a single part and drops out
        assert!(items.iter().all(|w| w.parts == (2..=2)));
        assert!(!items.iter().any(|w| w.day == 5));
    }

    #[test]
    fn test_runs_almanac_from_input_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(
            temp.path().join("2023").join("day05.txt"),
            "seeds: 40 7\n\nseed-to-soil map:\n0 5 10\n",
        )
        .unwrap();

        let exec = executor(temp.path(), &["-d", "5"]);
        let items = exec.collect_work_items();
        assert!(exec.missing_inputs(&items).is_empty());

        let mut seen = Vec::new();
        exec.execute(&items, |results| seen.extend_from_slice(results))
            .unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].sentence(), "The smallest location number is 2");
        assert!(seen[0].parse_duration.is_some());
    }

    #[test]
    fn test_malformed_input_aborts_without_results() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(
            temp.path().join("2023").join("day05.txt"),
            "seeds: 40 7\nseed-to-soil map:\n0 5\n",
        )
        .unwrap();

        let exec = executor(temp.path(), &["-d", "5"]);
        let items = exec.collect_work_items();
        let mut seen = 0;
        let err = exec.execute(&items, |results| seen += results.len()).unwrap_err();
        assert_eq!(seen, 0);
        assert!(matches!(
            err,
            CliError::Solver {
                year: 2023,
                day: 5,
                source: SolverError::Parse(ParseError::Line {
                    number: 3,
                    source: LineError::Malformed(_),
                    ..
                }),
            }
        ));
    }

    #[test]
    fn test_missing_inputs_listed() {
        let temp = TempDir::new().unwrap();
        let exec = executor(temp.path(), &["-d", "1"]);
        let items = exec.collect_work_items();
        let missing = exec.missing_inputs(&items);
        assert_eq!(missing.len(), 1);
        assert_eq!((missing[0].0, missing[0].1), (2023, 1));
    }
}
