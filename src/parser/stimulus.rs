//! Lazy stimulus streams from JSON Lines input.
//!
//! Each non-blank line holds one stimulus record, e.g. `{"A": 149, "B": 151}`.
//! Lines starting with `#` are comments. Records are parsed only when the
//! estimator asks for the next one.

use crate::model::Stimulus;
use crate::utils::error::TraceError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Iterator over stimulus records read line by line
pub struct StimulusReader<R> {
    reader: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> StimulusReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }
}

impl StimulusReader<BufReader<File>> {
    /// Open a JSON Lines stimulus file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for StimulusReader<R> {
    type Item = Result<Stimulus, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => self.line_number += 1,
                Err(e) => return Some(Err(TraceError::IoError(e))),
            }

            let trimmed = self.line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let line = self.line_number;
            return Some(
                serde_json::from_str(trimmed)
                    .map_err(|source| TraceError::InvalidRecord { line, source }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_records_and_skips_comments() {
        let input = "# header\n{\"A\": 1, \"B\": 2}\n\n{\"A\": 3, \"B\": 4}\n";
        let records: Vec<Stimulus> = StimulusReader::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("A"), Some(3));
    }

    #[test]
    fn test_reports_bad_line_number() {
        let input = "{\"A\": 1}\n{\"A\": -1}\n";
        let mut reader = StimulusReader::new(Cursor::new(input));

        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_input() {
        assert!(StimulusReader::new(Cursor::new("")).next().is_none());
    }
}
