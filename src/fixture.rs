//! Vocabulary fixtures.
//!
//! A fixture is two files with one word per line: the vocabulary and the
//! expected stem of each vocabulary word on the same line.

use crate::stemmer::Stemmer;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("fixture length mismatch: {vocabulary} vocabulary lines, {expected} expected lines")]
    LengthMismatch { vocabulary: usize, expected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl FixtureReport {
    #[inline]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Stem every vocabulary line and compare it with the expected line.
pub fn check(
    vocabulary: impl BufRead,
    expected: impl BufRead,
    stemmer: &dyn Stemmer,
) -> Result<FixtureReport, FixtureError> {
    let vocabulary = read_lines(vocabulary)?;
    let expected = read_lines(expected)?;
    if vocabulary.len() != expected.len() {
        return Err(FixtureError::LengthMismatch {
            vocabulary: vocabulary.len(),
            expected: expected.len(),
        });
    }

    let mut report = FixtureReport::default();
    for (n, (word, want)) in vocabulary.into_iter().zip(expected).enumerate() {
        let actual = stemmer.stem(&word);
        report.checked += 1;
        if actual != want {
            log::debug!("{}: {word:?} expected {want:?} got {actual:?}", stemmer.name());
            report.mismatches.push(Mismatch {
                line: n + 1,
                word,
                expected: want,
                actual,
            });
        }
    }
    log::info!(
        "{}: {} words checked, {} mismatches",
        stemmer.name(),
        report.checked,
        report.mismatches.len()
    );
    Ok(report)
}

pub fn check_files(
    vocabulary: impl AsRef<Path>,
    expected: impl AsRef<Path>,
    stemmer: &dyn Stemmer,
) -> Result<FixtureReport, FixtureError> {
    let vocabulary = BufReader::new(File::open(vocabulary)?);
    let expected = BufReader::new(File::open(expected)?);
    check(vocabulary, expected, stemmer)
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENG, Stemmy};

    #[test]
    fn reports_mismatches_with_line_numbers() {
        let stemmer = Stemmy::new(ENG).unwrap();
        let voc = "caresses\nponies\nties\n";
        let out = "caress\nponi\nties\n";
        let report = check(voc.as_bytes(), out.as_bytes(), &stemmer).unwrap();
        assert_eq!(report.checked, 3);
        assert!(!report.passed());
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                line: 3,
                word: "ties".into(),
                expected: "ties".into(),
                actual: "tie".into(),
            }]
        );
    }

    #[test]
    fn rejects_uneven_files() {
        let stemmer = Stemmy::new(ENG).unwrap();
        let err = check("a\nb\n".as_bytes(), "a\n".as_bytes(), &stemmer).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::LengthMismatch {
                vocabulary: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn tolerates_crlf() {
        let stemmer = Stemmy::new(ENG).unwrap();
        let report = check("feed\r\n".as_bytes(), "feed\r\n".as_bytes(), &stemmer).unwrap();
        assert!(report.passed());
    }

    #[test]
    fn missing_file_is_io_error() {
        let stemmer = Stemmy::new(ENG).unwrap();
        let err = check_files("/nonexistent/voc.txt", "/nonexistent/out.txt", &stemmer);
        assert!(matches!(err, Err(FixtureError::Io(_))));
    }
}
