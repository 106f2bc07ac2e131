use crate::utils::tokens::{parse_number, parse_numbers};
use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::io::BufRead;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, label = "number of winning ways")]
#[aoc(year = 2023, day = 6, tags = ["math", "binary-search"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    fn distance(&self, hold: u64) -> u128 {
        u128::from(hold) * u128::from(self.time - hold)
    }

    /// Number of hold times that travel strictly further than the record
    ///
    /// Distance is symmetric around `time / 2`, so only the shortest winning hold
    /// needs to be found.
    pub fn ways_to_win(&self) -> u64 {
        let peak = self.time / 2;
        let record = u128::from(self.record);
        if self.distance(peak) <= record {
            return 0;
        }
        let (mut lo, mut hi) = (0, peak);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.distance(mid) > record {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        self.time - 2 * lo + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSheet {
    pub races: Vec<Race>,
    /// All digits of each line read as a single race
    pub joined: Race,
}

#[derive(Default)]
struct SheetReader {
    times: Option<Vec<String>>,
    records: Option<Vec<String>>,
}

impl LineHandler for SheetReader {
    type Output = RaceSheet;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        let text = line.text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let (label, rest) = text
            .split_once(':')
            .ok_or_else(|| LineError::Malformed("missing ':'".into()))?;
        let slot = match label.trim() {
            "Time" => &mut self.times,
            "Distance" => &mut self.records,
            other => return Err(LineError::Malformed(format!("unknown label '{other}'"))),
        };
        if slot.is_some() {
            return Err(LineError::Sequencing(format!("'{}:' listed more than once", label.trim())));
        }
        *slot = Some(rest.split_whitespace().map(str::to_string).collect());
        Ok(())
    }

    fn finish(self) -> Result<RaceSheet, LineError> {
        let times = self.times.ok_or_else(|| LineError::Missing("no 'Time:' line".into()))?;
        let records = self
            .records
            .ok_or_else(|| LineError::Missing("no 'Distance:' line".into()))?;
        if times.len() != records.len() {
            return Err(LineError::Malformed(format!(
                "{} times but {} distances",
                times.len(),
                records.len()
            )));
        }

        let races = parse_numbers::<u64>(&times.join(" "))?
            .into_iter()
            .zip(parse_numbers::<u64>(&records.join(" "))?)
            .map(|(time, record)| Race { time, record })
            .collect();
        // Joining digits can exceed u64; the parse reports that as an invalid number
        let joined = Race {
            time: parse_number(&times.concat())?,
            record: parse_number(&records.concat())?,
        };
        Ok(RaceSheet { races, joined })
    }
}

impl AocParser for Solver {
    type SharedData = RaceSheet;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(SheetReader::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let product = shared
            .races
            .iter()
            .map(|race| u128::from(race.ways_to_win()))
            .product::<u128>();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.joined.ways_to_win().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use proptest::prelude::*;

    const EXAMPLE: &str = indoc! {"
        Time:      7  15   30
        Distance:  9  40  200
    "};

    fn parse(text: &str) -> Result<RaceSheet, ParseError> {
        Solver::parse(LineSource::from_text(text))
    }

    #[test]
    fn test_example() {
        let mut shared = parse(EXAMPLE).unwrap();
        assert_eq!(shared.joined, Race { time: 71530, record: 940200 });
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "288");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "71503");
    }

    #[test]
    fn test_label_reads_for_both_parts() {
        assert_eq!(
            <Solver as aoc_solver::Solver>::ANSWER_LABEL,
            "number of winning ways"
        );
    }

    #[test]
    fn test_missing_and_duplicate_lines() {
        assert!(matches!(
            parse("Time: 7\n"),
            Err(ParseError::Incomplete(LineError::Missing(_)))
        ));
        assert!(matches!(
            parse("Time: 7\nTime: 8\n"),
            Err(ParseError::Line { number: 2, source: LineError::Sequencing(_), .. })
        ));
        assert!(matches!(
            parse("Time: 7 8\nDistance: 9\n"),
            Err(ParseError::Incomplete(LineError::Malformed(_)))
        ));
    }

    #[test]
    fn test_unbeatable_record() {
        assert_eq!(Race { time: 4, record: 4 }.ways_to_win(), 0);
        assert_eq!(Race { time: 0, record: 0 }.ways_to_win(), 0);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(time in 0u64..300, record in 0u64..25_000) {
            let race = Race { time, record };
            let brute = (0..=time).filter(|&h| h * (time - h) > record).count() as u64;
            prop_assert_eq!(race.ways_to_win(), brute);
        }
    }
}
