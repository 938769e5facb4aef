//! Append-only log of solved answers
//!
//! Entries are only ever appended; an existing log keeps its previous runs.

use super::formatters::format_log_entry;
use crate::solver::SolveRecord;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry per record, creating the file if needed
    ///
    /// Returns the number of entries written.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or written.
    pub fn append<'r>(
        &self,
        records: impl IntoIterator<Item = &'r SolveRecord>,
    ) -> io::Result<usize> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        let mut written = 0;
        for record in records {
            writer.write_all(format_log_entry(record).as_bytes())?;
            written += 1;
        }

        writer.flush()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Word};
    use std::fs;

    fn record(answer: &str) -> SolveRecord {
        let answer = Word::new(answer).unwrap();
        SolveRecord {
            answer: answer.clone(),
            guesses: vec![answer],
            outcomes: vec![Outcome::SOLVED],
            solved: true,
        }
    }

    #[test]
    fn append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultLog::new(dir.path().join("results.txt"));

        let written = log.append(&[record("zebra")]).unwrap();

        assert_eq!(written, 1);
        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "The word was ZEBRA which was solved in 1 guess(es)\n['zebra']\n"
        );
    }

    #[test]
    fn append_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "previous run\n").unwrap();

        let log = ResultLog::new(&path);
        log.append(&[record("angle")]).unwrap();
        log.append(&[record("apple")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous run\n"));
        assert_eq!(content.matches("The word was").count(), 2);
        assert!(content.find("ANGLE").unwrap() < content.find("APPLE").unwrap());
    }
}
