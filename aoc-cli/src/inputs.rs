//! Location of puzzle inputs on disk

use crate::error::CliError;
use aoc_solver::{InputSource, LineSource};
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`
pub struct InputDir {
    base_dir: PathBuf,
}

impl InputDir {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Open a fresh line source for year/day
    pub fn open(&self, year: u16, day: u8) -> Result<InputSource, CliError> {
        let path = self.input_path(year, day);
        if !path.is_file() {
            return Err(CliError::MissingInput { year, day, path });
        }
        open_path(&path, year, day)
    }
}

/// Open any file as a line source, attributing failures to year/day
pub fn open_path(path: &Path, year: u16, day: u8) -> Result<InputSource, CliError> {
    LineSource::open(path)
        .map(LineSource::boxed)
        .map_err(|e| CliError::solver(year, day)(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{ParseError, SolverError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let inputs = InputDir::new(PathBuf::from("inputs"));
        assert_eq!(
            inputs.input_path(2023, 5),
            PathBuf::from("inputs").join("2023").join("day05.txt")
        );
        assert!(inputs.input_path(2023, 25).ends_with("day25.txt"));
    }

    #[test]
    fn test_open_reads_lines() {
        let temp = TempDir::new().unwrap();
        let inputs = InputDir::new(temp.path().to_path_buf());
        assert!(!inputs.contains(2023, 1));
        assert!(matches!(
            inputs.open(2023, 1),
            Err(CliError::MissingInput { year: 2023, day: 1, .. })
        ));

        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(inputs.input_path(2023, 1), "a\nb\n").unwrap();
        assert!(inputs.contains(2023, 1));

        let texts: Vec<String> = inputs
            .open(2023, 1)
            .unwrap()
            .map(|line| line.unwrap().text)
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_unreadable_path_is_open_error() {
        let temp = TempDir::new().unwrap();
        let err = open_path(&temp.path().join("nope.txt"), 2023, 5).err().unwrap();
        assert!(matches!(
            err,
            CliError::Solver {
                source: SolverError::Parse(ParseError::Open { .. }),
                ..
            }
        ));
    }
}
