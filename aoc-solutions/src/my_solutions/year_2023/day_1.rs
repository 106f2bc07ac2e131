use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::io::BufRead;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["easy", "parsing"])]
pub struct Solver;

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

#[derive(Debug, Error)]
#[error("line {0} has no digit")]
pub struct NoDigit(usize);

/// First and last digit of one line, with and without spelled-out digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    line: usize,
    digits: Option<(u32, u32)>,
    spelled: Option<(u32, u32)>,
}

fn digit_at(text: &str, idx: usize, spelled: bool) -> Option<u32> {
    let rest = &text[idx..];
    let first = rest.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    if !spelled {
        return None;
    }
    DIGIT_WORDS
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|pos| pos as u32 + 1)
}

fn first_and_last(text: &str, spelled: bool) -> Option<(u32, u32)> {
    let mut found = text
        .char_indices()
        .filter_map(|(idx, _)| digit_at(text, idx, spelled));
    let first = found.next()?;
    let last = found.last().unwrap_or(first);
    Some((first, last))
}

impl Calibration {
    pub fn read(line: &Line) -> Self {
        Self {
            line: line.number,
            digits: first_and_last(&line.text, false),
            spelled: first_and_last(&line.text, true),
        }
    }
}

#[derive(Default)]
struct Document(Vec<Calibration>);

impl LineHandler for Document {
    type Output = Vec<Calibration>;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        if !line.text.trim().is_empty() {
            self.0.push(Calibration::read(line));
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, LineError> {
        Ok(self.0)
    }
}

fn sum_values<F>(shared: &[Calibration], pick: F) -> Result<String, SolveError>
where
    F: Fn(&Calibration) -> Option<(u32, u32)>,
{
    shared
        .iter()
        .map(|cal| {
            pick(cal)
                .map(|(first, last)| u64::from(first * 10 + last))
                .ok_or(NoDigit(cal.line))
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
        .map_err(SolveError::failed)
}

impl AocParser for Solver {
    type SharedData = Vec<Calibration>;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(Document::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        sum_values(shared, |cal| cal.digits)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        sum_values(shared, |cal| cal.spelled)
    }
}
