use crate::utils::tokens::{labelled_id, parse_numbers};
use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;
use std::io::BufRead;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["easy", "dp"])]
pub struct Solver;

#[derive(Debug, Error)]
#[error("card {card} pushes the total past u64::MAX")]
pub struct Overflow {
    card: usize,
}

/// Number of winning numbers on one card
fn matches_on(text: &str) -> Result<usize, LineError> {
    let (_, numbers) = labelled_id(text, "Card")?;
    let (winning, have) = numbers
        .split_once('|')
        .ok_or_else(|| LineError::Malformed("missing '|' between number lists".into()))?;
    let winning: HashSet<u32> = parse_numbers(winning)?.into_iter().collect();
    Ok(parse_numbers::<u32>(have)?
        .iter()
        .filter(|n| winning.contains(*n))
        .count())
}

#[derive(Default)]
struct Pile(Vec<usize>);

impl LineHandler for Pile {
    type Output = Vec<usize>;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        if !line.text.trim().is_empty() {
            self.0.push(matches_on(&line.text)?);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, LineError> {
        Ok(self.0)
    }
}

impl AocParser for Solver {
    type SharedData = Vec<usize>;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(Pile::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut total = 0u64;
        for (idx, &matches) in shared.iter().enumerate() {
            if matches == 0 {
                continue;
            }
            total = u32::try_from(matches - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .and_then(|points| total.checked_add(points))
                .ok_or_else(|| SolveError::failed(Overflow { card: idx + 1 }))?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (idx, &matches) in shared.iter().enumerate() {
            let won = copies[idx];
            for later in copies.iter_mut().skip(idx + 1).take(matches) {
                *later = later
                    .checked_add(won)
                    .ok_or_else(|| SolveError::failed(Overflow { card: idx + 1 }))?;
            }
        }
        copies
            .iter()
            .try_fold(0u64, |total, &n| total.checked_add(n))
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::failed(Overflow { card: copies.len() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
        Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
        Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
        Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
        Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
        Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(LineSource::from_text(EXAMPLE)).unwrap();
        assert_eq!(shared, vec![4, 2, 2, 1, 0, 0]);
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "13");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "30");
    }

    #[test]
    fn test_oversized_card_is_an_error() {
        let have = vec!["1"; 65].join(" ");
        let mut shared = Solver::parse(LineSource::from_text(&format!("Card 1: 1 | {have}\n")))
            .unwrap();
        assert_eq!(shared, vec![65]);
        match <Solver as PartSolver<1>>::solve(&mut shared) {
            Err(SolveError::SolveFailed(cause)) => {
                assert_eq!(cause.to_string(), "card 1 pushes the total past u64::MAX")
            }
            other => panic!("expected overflow, got {other:?}"),
        }

        let mut shared = vec![64];
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            (1u64 << 63).to_string()
        );
    }

    #[test]
    fn test_copies_overflow_is_an_error() {
        // Each card doubles the copies of every later card
        let mut shared: Vec<usize> = (0..70).rev().collect();
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut shared),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            matches_on("Card 1: 1 2 3 4"),
            Err(LineError::Malformed(_))
        ));
    }
}
