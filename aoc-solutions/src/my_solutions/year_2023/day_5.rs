//! Seed almanac: push a list of seeds through a chain of range-remapping stages
//!
//! Input shape:
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ...
//! ```
//!
//! Each stage's rules are only known once the next header (or the end of input) is
//! reached, so a stage is applied lazily at that point.

use crate::utils::remap::{RangeRule, Remapped, Stage, remap};
use crate::utils::tokens::{parse_number, parse_numbers};
use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::io::BufRead;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1, label = "smallest location number")]
#[aoc(year = 2023, day = 5, tags = ["remap", "state-machine"])]
pub struct Solver;

const DEFAULT_STAGES: [&str; 7] = [
    "seed-to-soil",
    "soil-to-fertilizer",
    "fertilizer-to-water",
    "water-to-light",
    "light-to-temperature",
    "temperature-to-humidity",
    "humidity-to-location",
];

/// Labels the classifier recognises
#[derive(Debug, Clone)]
pub struct AlmanacLayout {
    /// Label of the initial values line (`seeds`)
    pub values_label: String,
    /// Names accepted in `<name> map:` headers
    pub stage_names: Vec<String>,
}

impl Default for AlmanacLayout {
    fn default() -> Self {
        Self {
            values_label: "seeds".to_string(),
            stage_names: DEFAULT_STAGES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl AlmanacLayout {
    fn is_stage(&self, name: &str) -> bool {
        self.stage_names.iter().any(|stage| stage == name)
    }
}

/// What a single almanac line encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Blank,
    Values(Vec<u64>),
    StageHeader(String),
    Rule(RangeRule),
}

impl Record {
    /// Classify one line without looking at any accumulated state
    pub fn classify(text: &str, layout: &AlmanacLayout) -> Result<Record, LineError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Record::Blank);
        }

        if let Some((head, rest)) = text.split_once(':') {
            let (head, rest) = (head.trim(), rest.trim());
            if head == layout.values_label {
                if rest.is_empty() {
                    return Err(LineError::Malformed(format!(
                        "'{head}:' lists no values"
                    )));
                }
                return parse_numbers(rest).map(Record::Values);
            }
            if !rest.is_empty() {
                return Err(LineError::Malformed(format!(
                    "unexpected text after '{head}:'"
                )));
            }

            let mut tokens = head.split_whitespace();
            let name = tokens.next().unwrap_or_default();
            let suffix_ok = match (tokens.next(), tokens.next()) {
                (None, _) | (Some("map"), None) => true,
                _ => false,
            };
            if !suffix_ok || !layout.is_stage(name) {
                return Err(LineError::Malformed(format!("unknown stage header '{head}'")));
            }
            return Ok(Record::StageHeader(name.to_string()));
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [destination, source, length] => Ok(Record::Rule(RangeRule::new(
                parse_number(destination)?,
                parse_number(source)?,
                parse_number(length)?,
            ))),
            other => Err(LineError::Malformed(format!(
                "expected 3 numbers, found {}",
                other.len()
            ))),
        }
    }
}

#[derive(Debug)]
enum State {
    AwaitingInput,
    HaveValues { values: Vec<u64> },
    InStage { values: Vec<u64>, stage: Stage },
}

/// Line handler accumulating the seed list and the currently open stage
#[derive(Debug)]
pub struct Almanac {
    layout: AlmanacLayout,
    state: State,
}

impl Default for Almanac {
    fn default() -> Self {
        Self::new(AlmanacLayout::default())
    }
}

impl Almanac {
    pub fn new(layout: AlmanacLayout) -> Self {
        Self {
            layout,
            state: State::AwaitingInput,
        }
    }
}

impl LineHandler for Almanac {
    type Output = Remapped;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        match Record::classify(&line.text, &self.layout)? {
            Record::Blank => Ok(()),
            Record::Values(values) => match self.state {
                State::AwaitingInput => {
                    log::debug!("Read {} at line {}: {:?}", self.layout.values_label, line.number, values);
                    self.state = State::HaveValues { values };
                    Ok(())
                }
                State::HaveValues { .. } => Err(LineError::Sequencing(format!(
                    "'{}:' listed more than once",
                    self.layout.values_label
                ))),
                State::InStage { .. } => Err(LineError::Sequencing(format!(
                    "'{}:' after a stage header",
                    self.layout.values_label
                ))),
            },
            Record::StageHeader(name) => {
                let values = match std::mem::replace(&mut self.state, State::AwaitingInput) {
                    State::AwaitingInput => {
                        return Err(LineError::Sequencing(format!(
                            "stage '{name}' opened before any '{}:' line",
                            self.layout.values_label
                        )));
                    }
                    State::HaveValues { values } => values,
                    State::InStage { values, stage } => {
                        let remapped = stage.apply(&values).map_err(LineError::compute)?;
                        log::debug!("Closed stage {}, current min: {}", stage.name, remapped.min);
                        remapped.values
                    }
                };
                log::debug!("Opened stage {name} at line {}", line.number);
                self.state = State::InStage {
                    values,
                    stage: Stage::new(name),
                };
                Ok(())
            }
            Record::Rule(rule) => match &mut self.state {
                State::InStage { stage, .. } => {
                    stage.push(rule);
                    Ok(())
                }
                _ => Err(LineError::Sequencing(format!(
                    "range rule {rule} before any stage header"
                ))),
            },
        }
    }

    fn finish(self) -> Result<Remapped, LineError> {
        match self.state {
            State::AwaitingInput => Err(LineError::Missing(format!(
                "no '{}:' line",
                self.layout.values_label
            ))),
            State::HaveValues { values } => remap(&values, &[]).map_err(LineError::compute),
            State::InStage { values, stage } => {
                let remapped = stage.apply(&values).map_err(LineError::compute)?;
                log::debug!("Closed stage {}, final min: {}", stage.name, remapped.min);
                Ok(remapped)
            }
        }
    }
}

impl AocParser for Solver {
    type SharedData = Remapped;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(Almanac::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.min.to_string())
    }
}
