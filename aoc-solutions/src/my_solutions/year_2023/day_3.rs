use crate::utils::tokens::parse_number;
use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::io::BufRead;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid"])]
pub struct Solver;

/// A run of digits on one row, spanning columns `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    pub row: usize,
    pub start: usize,
    pub end: usize,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub row: usize,
    pub col: usize,
    pub glyph: char,
}

impl PartNumber {
    fn touches(&self, symbol: &Symbol) -> bool {
        symbol.row + 1 >= self.row
            && symbol.row <= self.row + 1
            && symbol.col + 1 >= self.start
            && symbol.col <= self.end
    }
}

#[derive(Debug, Default)]
pub struct Schematic {
    pub numbers: Vec<PartNumber>,
    pub symbols: Vec<Symbol>,
}

#[derive(Default)]
struct Scanner {
    schematic: Schematic,
    row: usize,
}

impl LineHandler for Scanner {
    type Output = Schematic;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        let bytes = line.text.as_bytes();
        let mut col = 0;
        while col < bytes.len() {
            let b = bytes[col];
            if b.is_ascii_digit() {
                let start = col;
                while col < bytes.len() && bytes[col].is_ascii_digit() {
                    col += 1;
                }
                self.schematic.numbers.push(PartNumber {
                    row: self.row,
                    start,
                    end: col,
                    value: parse_number(&line.text[start..col])?,
                });
                continue;
            }
            if b != b'.' && !b.is_ascii_whitespace() {
                if !b.is_ascii() {
                    return Err(LineError::Malformed(format!("non-ASCII byte at column {}", col + 1)));
                }
                self.schematic.symbols.push(Symbol {
                    row: self.row,
                    col,
                    glyph: b as char,
                });
            }
            col += 1;
        }
        self.row += 1;
        Ok(())
    }

    fn finish(self) -> Result<Schematic, LineError> {
        Ok(self.schematic)
    }
}

impl AocParser for Solver {
    type SharedData = Schematic;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(Scanner::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .numbers
            .iter()
            .filter(|number| shared.symbols.iter().any(|symbol| number.touches(symbol)))
            .map(|number| number.value)
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut total = 0u64;
        for gear in shared.symbols.iter().filter(|symbol| symbol.glyph == '*') {
            let mut adjacent = shared.numbers.iter().filter(|number| number.touches(gear));
            if let (Some(a), Some(b), None) = (adjacent.next(), adjacent.next(), adjacent.next()) {
                total += a.value * b.value;
            }
        }
        Ok(total.to_string())
    }
}
