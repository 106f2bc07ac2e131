//! Camel cards: rank hands by type, then card by card

use crate::utils::tokens::parse_number;
use aoc_solver::{
    AocParser, Line, LineError, LineHandler, LineSource, ParseError, PartSolver, SolveError,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::io::BufRead;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, label = "total winnings")]
#[aoc(year = 2023, day = 7, tags = ["sorting"])]
pub struct Solver;

const CARD_ORDER: &[u8; 13] = b"23456789TJQKA";
const JOKER_ORDER: &[u8; 13] = b"J23456789TQKA";
const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// A named predicate over a hand's count profile (group sizes, largest first)
struct Rank {
    name: &'static str,
    kind: HandType,
    matches: fn(&[u8]) -> bool,
}

/// Checked in order; the first predicate that holds decides the type.
///
/// Entries run from most to least specific: a full house also satisfies
/// "three of a kind", so it must be listed first.
const RANKS: [Rank; 7] = [
    Rank {
        name: "five of a kind",
        kind: HandType::FiveOfAKind,
        matches: |p| p == [5],
    },
    Rank {
        name: "four of a kind",
        kind: HandType::FourOfAKind,
        matches: |p| p.first() == Some(&4),
    },
    Rank {
        name: "full house",
        kind: HandType::FullHouse,
        matches: |p| p == [3, 2],
    },
    Rank {
        name: "three of a kind",
        kind: HandType::ThreeOfAKind,
        matches: |p| p.first() == Some(&3),
    },
    Rank {
        name: "two pair",
        kind: HandType::TwoPair,
        matches: |p| p.starts_with(&[2, 2]),
    },
    Rank {
        name: "one pair",
        kind: HandType::OnePair,
        matches: |p| p.first() == Some(&2),
    },
    Rank {
        name: "high card",
        kind: HandType::HighCard,
        matches: |p| p.len() == HAND_SIZE,
    },
];

#[derive(Debug, Error)]
#[error("hand {0} matches no rank")]
pub struct Unranked(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; HAND_SIZE],
    pub bid: u64,
}

impl Hand {
    pub fn parse(text: &str) -> Result<Self, LineError> {
        let (cards, bid) = text
            .split_once(' ')
            .ok_or_else(|| LineError::Malformed("expected '<cards> <bid>'".into()))?;
        let cards: [u8; HAND_SIZE] = cards
            .as_bytes()
            .try_into()
            .map_err(|_| LineError::Malformed(format!("hand '{cards}' must have {HAND_SIZE} cards")))?;
        if let Some(bad) = cards.iter().find(|&&card| !CARD_ORDER.contains(&card)) {
            return Err(LineError::Malformed(format!("unknown card '{}'", *bad as char)));
        }
        Ok(Self {
            cards,
            bid: parse_number(bid.trim())?,
        })
    }

    fn label(&self) -> String {
        String::from_utf8_lossy(&self.cards).into_owned()
    }

    /// Group sizes, largest first; with jokers the jokers join the largest group
    fn profile(&self, jokers: bool) -> Vec<u8> {
        let mut counts = [0u8; 13];
        let mut wild = 0;
        for &card in &self.cards {
            if jokers && card == b'J' {
                wild += 1;
            } else if let Some(idx) = CARD_ORDER.iter().position(|&c| c == card) {
                counts[idx] += 1;
            }
        }
        let mut profile: Vec<u8> = counts.into_iter().filter(|&n| n > 0).collect();
        profile.sort_unstable_by(|a, b| b.cmp(a));
        match profile.first_mut() {
            Some(largest) => *largest += wild,
            None => profile.push(wild),
        }
        profile
    }

    pub fn classify(&self, jokers: bool) -> Option<HandType> {
        let profile = self.profile(jokers);
        RANKS.iter().find(|rank| (rank.matches)(&profile)).map(|rank| {
            log::trace!("{} is {}", self.label(), rank.name);
            rank.kind
        })
    }

    fn strengths(&self, jokers: bool) -> [usize; HAND_SIZE] {
        let order = if jokers { JOKER_ORDER } else { CARD_ORDER };
        self.cards
            .map(|card| order.iter().position(|&c| c == card).unwrap_or_default())
    }
}

fn total_winnings(hands: &[Hand], jokers: bool) -> Result<String, SolveError> {
    let mut keyed = hands
        .iter()
        .map(|hand| {
            hand.classify(jokers)
                .map(|kind| ((kind, hand.strengths(jokers)), hand.bid))
                .ok_or_else(|| SolveError::failed(Unranked(hand.label())))
        })
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed
        .iter()
        .zip(1u64..)
        .map(|((_, bid), rank)| bid * rank)
        .sum::<u64>()
        .to_string())
}

#[derive(Default)]
struct Table(Vec<Hand>);

impl LineHandler for Table {
    type Output = Vec<Hand>;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        let text = line.text.trim();
        if !text.is_empty() {
            self.0.push(Hand::parse(text)?);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, LineError> {
        Ok(self.0)
    }
}

impl AocParser for Solver {
    type SharedData = Vec<Hand>;

    fn parse<R: BufRead>(source: LineSource<R>) -> Result<Self::SharedData, ParseError> {
        source.feed(Table::default())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        total_winnings(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        total_winnings(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        32T3K 765
        T55J5 684
        KK677 28
        KTJJT 220
        QQQJA 483
    "};

    fn hand(cards: &str) -> Hand {
        Hand::parse(&format!("{cards} 1")).unwrap()
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(LineSource::from_text(EXAMPLE)).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "6440");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "5905");
    }

    #[test]
    fn test_most_specific_rank_wins() {
        assert_eq!(hand("AAAAA").classify(false), Some(HandType::FiveOfAKind));
        assert_eq!(hand("AA8AA").classify(false), Some(HandType::FourOfAKind));
        assert_eq!(hand("23332").classify(false), Some(HandType::FullHouse));
        assert_eq!(hand("TTT98").classify(false), Some(HandType::ThreeOfAKind));
        assert_eq!(hand("23432").classify(false), Some(HandType::TwoPair));
        assert_eq!(hand("A23A4").classify(false), Some(HandType::OnePair));
        assert_eq!(hand("23456").classify(false), Some(HandType::HighCard));
    }

    #[test]
    fn test_jokers_join_largest_group() {
        assert_eq!(hand("QJJQ2").classify(true), Some(HandType::FourOfAKind));
        assert_eq!(hand("JJJJJ").classify(true), Some(HandType::FiveOfAKind));
        assert_eq!(hand("2345J").classify(true), Some(HandType::OnePair));
        assert_eq!(hand("2233J").classify(true), Some(HandType::FullHouse));
    }

    #[test]
    fn test_invalid_hands_rejected() {
        assert!(matches!(Hand::parse("AAAA 1"), Err(LineError::Malformed(_))));
        assert!(matches!(Hand::parse("AAAAX 1"), Err(LineError::Malformed(_))));
        assert!(matches!(Hand::parse("AAAAA x"), Err(LineError::InvalidNumber { .. })));
        assert!(matches!(Hand::parse("AAAAA"), Err(LineError::Malformed(_))));
    }
}
