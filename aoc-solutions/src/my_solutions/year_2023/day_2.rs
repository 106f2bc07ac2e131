use crate::utils::tokens::{labelled_id, parse_number};
use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::io::BufRead;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["easy", "parsing"])]
pub struct Solver;

/// Largest number of cubes of each color shown in any reveal
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cubes {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

impl Cubes {
    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Game {
    pub id: u32,
    pub max: Cubes,
}

impl Game {
    /// Parse `Game <id>: 3 blue, 4 red; 1 red, 2 green`
    pub fn parse(text: &str) -> Result<Self, LineError> {
        let (id, reveals) = labelled_id(text, "Game")?;
        let mut max = Cubes::default();

        for draw in reveals.split([';', ',']) {
            let draw = draw.trim();
            if draw.is_empty() {
                continue;
            }
            let (count, color) = draw
                .split_once(' ')
                .ok_or_else(|| LineError::Malformed(format!("expected '<count> <color>', got '{draw}'")))?;
            let count: u32 = parse_number(count)?;
            let slot = match color.trim() {
                "red" => &mut max.red,
                "green" => &mut max.green,
                "blue" => &mut max.blue,
                other => return Err(LineError::Malformed(format!("unknown color '{other}'"))),
            };
            *slot = (*slot).max(count);
        }

        Ok(Self { id, max })
    }
}

#[derive(Default)]
struct Record(Vec<Game>);

impl LineHandler for Record {
    type Output = Vec<Game>;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        if !line.text.trim().is_empty() {
            self.0.push(Game::parse(&line.text)?);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, LineError> {
        Ok(self.0)
    }
}

impl AocParser for Solver {
    type SharedData = Vec<Game>;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(Record::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.max.fits_in(&BAG))
            .map(|game| u64::from(game.id))
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|game| game.max.power())
            .sum::<u64>()
            .to_string())
    }
}
