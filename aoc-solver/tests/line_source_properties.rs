//! Property-based tests for line ingestion
//!
//! **Feature: line-source**

use aoc_solver::{Line, LineError, LineHandler, LineSource, ParseError};
use proptest::prelude::*;

/// Records every delivered line and counts `finish` calls through the output
#[derive(Default)]
struct Recorder {
    seen: Vec<Line>,
    reject: Option<usize>,
}

impl LineHandler for Recorder {
    type Output = Vec<Line>;

    fn handle(&mut self, line: &Line) -> Result<(), LineError> {
        if Some(line.number) == self.reject {
            return Err(LineError::Malformed("rejected".into()));
        }
        self.seen.push(line.clone());
        Ok(())
    }

    fn finish(self) -> Result<Vec<Line>, LineError> {
        Ok(self.seen)
    }
}

fn text_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9 :]{0,12}", 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: line-source, Property 1: In-order, complete delivery**
    /// *For any* text, the handler sees every line exactly once, in file order, numbered from 1.
    #[test]
    fn prop_every_line_delivered_in_order(lines in text_lines()) {
        let text = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
        let seen = LineSource::from_text(&text).feed(Recorder::default()).unwrap();

        prop_assert_eq!(seen.len(), lines.len());
        for (idx, (line, expected)) in seen.iter().zip(&lines).enumerate() {
            prop_assert_eq!(line.number, idx + 1);
            prop_assert_eq!(&line.text, expected);
        }
    }

    /// **Feature: line-source, Property 2: First failure aborts**
    /// *For any* rejected line, the error names that line and nothing after it is handled.
    #[test]
    fn prop_rejection_names_line(lines in prop::collection::vec("[a-z]{1,6}", 1..20), pick in any::<prop::sample::Index>()) {
        let reject = pick.index(lines.len()) + 1;
        let text = lines.join("\n");
        let handler = Recorder { seen: Vec::new(), reject: Some(reject) };

        match LineSource::from_text(&text).feed(handler) {
            Err(ParseError::Line { number, text, .. }) => {
                prop_assert_eq!(number, reject);
                prop_assert_eq!(&text, &lines[reject - 1]);
            }
            other => prop_assert!(false, "expected line error, got {:?}", other.map(|v| v.len())),
        }
    }
}
