//! Line-oriented input ingestion
//!
//! A [`LineSource`] is a finite, non-restartable sequence of numbered lines read from a
//! file or any buffered reader. [`LineSource::feed`] drives a [`LineHandler`] over every
//! line in order and then finalizes it exactly once. To read the same input again, open
//! a fresh source.

use crate::error::{LineError, ParseError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One line of input, with its trailing newline stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the input
    pub number: usize,
    /// Line content without the line terminator
    pub text: String,
}

/// Source of lines backed by a type-erased reader, as handed to registered solvers
pub type InputSource = LineSource<Box<dyn BufRead>>;

/// Ordered, lazy sequence of input lines
pub struct LineSource<R> {
    reader: R,
    buffer: String,
    delivered: usize,
    exhausted: bool,
}

impl LineSource<BufReader<File>> {
    /// Open a file for line-by-line reading
    ///
    /// # Returns
    /// * `Ok(LineSource)` - The file was opened; nothing has been read yet
    /// * `Err(ParseError::Open)` - The file does not exist or is not readable
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Reading lines from {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> LineSource<&'a [u8]> {
    /// Read lines from text already held in memory
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            delivered: 0,
            exhausted: false,
        }
    }

    /// Erase the reader type so the source can cross a trait-object boundary
    pub fn boxed(self) -> InputSource
    where
        R: 'static,
    {
        LineSource {
            reader: Box::new(self.reader),
            buffer: self.buffer,
            delivered: self.delivered,
            exhausted: self.exhausted,
        }
    }

    /// Number of lines delivered so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Deliver every remaining line to `handler`, then finalize it
    ///
    /// Lines reach the handler strictly in order, one at a time. After the last line the
    /// handler's [`LineHandler::finish`] runs exactly once and its output is returned.
    /// The first failure stops the run: no later line is delivered and `finish` is not
    /// called.
    ///
    /// # Returns
    /// * `Ok(H::Output)` - All lines were accepted and the handler finalized
    /// * `Err(ParseError::Read)` - The underlying reader failed
    /// * `Err(ParseError::Line)` - The handler rejected a line; carries its number and text
    /// * `Err(ParseError::Incomplete)` - The handler could not finalize at end of stream
    pub fn feed<H: LineHandler>(self, mut handler: H) -> Result<H::Output, ParseError> {
        for line in self {
            let line = line?;
            if let Err(source) = handler.handle(&line) {
                return Err(ParseError::Line {
                    number: line.number,
                    text: line.text,
                    source,
                });
            }
        }
        handler.finish().map_err(ParseError::Incomplete)
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<Line, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => {
                self.exhausted = true;
                None
            }
            Ok(_) => {
                let text = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);
                let text = text.strip_suffix('\r').unwrap_or(text);
                self.delivered += 1;
                Some(Ok(Line {
                    number: self.delivered,
                    text: text.to_string(),
                }))
            }
            Err(source) => {
                self.exhausted = true;
                Some(Err(ParseError::Read {
                    line: self.delivered,
                    source,
                }))
            }
        }
    }
}

/// Per-unit accumulator driven one line at a time
///
/// The handler owns all unit-local state. `handle` classifies a line and updates that
/// state; `finish` runs once at end of stream and produces the final value.
pub trait LineHandler {
    /// Value produced once the whole input has been consumed
    type Output;

    /// Accept one line
    fn handle(&mut self, line: &Line) -> Result<(), LineError>;

    /// Finalize after the last line
    fn finish(self) -> Result<Self::Output, LineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct Collect(Vec<(usize, String)>);

    impl LineHandler for Collect {
        type Output = Vec<(usize, String)>;

        fn handle(&mut self, line: &Line) -> Result<(), LineError> {
            if line.text == "stop" {
                return Err(LineError::Malformed("stop word".into()));
            }
            self.0.push((line.number, line.text.clone()));
            Ok(())
        }

        fn finish(self) -> Result<Self::Output, LineError> {
            if self.0.is_empty() {
                return Err(LineError::Missing("no lines".into()));
            }
            Ok(self.0)
        }
    }

    #[test]
    fn test_lines_are_numbered_in_order() {
        let lines: Vec<Line> = LineSource::from_text("a\nb\r\n\nc")
            .collect::<Result<_, _>>()
            .unwrap();
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
        assert_eq!(texts, vec!["a", "b", "", "c"]);
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_feed_finishes_after_last_line() {
        let out = LineSource::from_text("x\ny\n").feed(Collect::default()).unwrap();
        assert_eq!(out, vec![(1, "x".to_string()), (2, "y".to_string())]);
    }

    #[test]
    fn test_feed_stops_at_first_rejected_line() {
        let err = LineSource::from_text("x\nstop\nz")
            .feed(Collect::default())
            .unwrap_err();
        match err {
            ParseError::Line { number, text, source } => {
                assert_eq!(number, 2);
                assert_eq!(text, "stop");
                assert!(matches!(source, LineError::Malformed(_)));
            }
            other => panic!("expected line error, got {other:?}"),
        }
    }

    #[test]
    fn test_finish_failure_is_incomplete() {
        let err = LineSource::from_text("").feed(Collect::default()).unwrap_err();
        assert!(matches!(err, ParseError::Incomplete(LineError::Missing(_))));
        assert_eq!(err.line_number(), None);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LineSource::open(dir.path().join("absent.txt")).err().unwrap();
        assert!(matches!(err, ParseError::Open { .. }));
    }

    #[test]
    fn test_open_reads_file_and_boxes() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();

        let source = LineSource::open(file.path()).unwrap().boxed();
        let out = source.feed(Collect::default()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], (2, "second".to_string()));
    }

    #[test]
    fn test_source_is_not_restartable() {
        let mut source = LineSource::from_text("only");
        assert!(source.next().is_some());
        assert!(source.next().is_none());
        assert!(source.next().is_none());
        assert_eq!(source.delivered(), 1);
    }
}
