//! Ledger file access
//!
//! The [`Ledger`] is the only component that touches the ledger file. Every
//! operation opens the file, does its work and drops the handle before
//! returning, so no handle outlives a single call.
//!
//! # Iterator Interface
//!
//! [`Ledger::read_all`] returns a [`LedgerLines`] iterator, yielding
//! `Result<String, TrackerError>` for each record line after the header:
//!
//! ```no_run
//! use expense_tracker::io::Ledger;
//!
//! let ledger = Ledger::new("expenses.csv");
//! for line in ledger.read_all().unwrap() {
//!     match line {
//!         Ok(line) => println!("{}", line),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```
//!
//! A record whose quoted field contains a newline spans several physical
//! lines; the iterator joins them back into one logical line, keeping the
//! embedded terminators (`\n` or `\r\n`) exactly as stored. Only the
//! terminator ending the record is removed.

use crate::io::csv_format::{is_unterminated, HEADER, LINE_ENDING};
use crate::types::{LedgerOperation, TrackerError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle on a ledger file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Ledger { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger with only the header line if it does not exist
    ///
    /// An existing ledger is left untouched, so calling this twice is a no-op
    /// the second time.
    ///
    /// # Errors
    ///
    /// Returns a `Create` ledger error if the file cannot be created or
    /// written.
    pub fn ensure_initialized(&self) -> Result<(), TrackerError> {
        let exists = self
            .path
            .try_exists()
            .map_err(|e| self.error(LedgerOperation::Create, e))?;
        if exists {
            debug!(path = %self.path.display(), "ledger already exists");
            return Ok(());
        }

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(self.error(LedgerOperation::Create, e)),
        };

        file.write_all(format!("{}{}", HEADER, LINE_ENDING).as_bytes())
            .map_err(|e| self.error(LedgerOperation::Create, e))?;

        info!(path = %self.path.display(), "created ledger");
        Ok(())
    }

    /// Append one encoded line to the ledger
    ///
    /// A missing line terminator is added. The ledger must already exist.
    ///
    /// # Errors
    ///
    /// Returns an `Append` ledger error if the file cannot be opened or
    /// written. The caller may retry.
    pub fn append(&self, line: &str) -> Result<(), TrackerError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.error(LedgerOperation::Append, e))?;

        let mut buffer = String::with_capacity(line.len() + LINE_ENDING.len());
        buffer.push_str(line);
        if !line.ends_with('\n') {
            buffer.push_str(LINE_ENDING);
        }

        file.write_all(buffer.as_bytes())
            .map_err(|e| self.error(LedgerOperation::Append, e))?;

        debug!(path = %self.path.display(), bytes = buffer.len(), "appended ledger line");
        Ok(())
    }

    /// Stream every record line after the header, in file order
    ///
    /// # Errors
    ///
    /// Returns a `Read` ledger error if the file cannot be opened. Errors while
    /// reading are yielded by the iterator.
    pub fn read_all(&self) -> Result<LedgerLines<BufReader<File>>, TrackerError> {
        let file = File::open(&self.path).map_err(|e| self.error(LedgerOperation::Read, e))?;
        Ok(LedgerLines::new(BufReader::new(file), &self.path))
    }

    fn error(&self, operation: LedgerOperation, error: io::Error) -> TrackerError {
        TrackerError::ledger(operation, &self.path, error)
    }
}

/// Lazy iterator over the record lines of a ledger
///
/// Skips the header, joins physical lines that belong to one quoted record,
/// and stops after the first read error.
#[derive(Debug)]
pub struct LedgerLines<R> {
    reader: R,
    path: PathBuf,
    header_skipped: bool,
    failed: bool,
}

impl<R: BufRead> LedgerLines<R> {
    /// Wrap a reader positioned at the start of a ledger
    ///
    /// `path` is only used in error messages.
    pub fn new(reader: R, path: &Path) -> Self {
        LedgerLines {
            reader,
            path: path.to_path_buf(),
            header_skipped: false,
            failed: false,
        }
    }

    // Append the next physical line, terminator included, to `buffer`.
    // Returns false at end of input.
    fn read_physical(&mut self, buffer: &mut String) -> Result<bool, TrackerError> {
        match self.reader.read_line(buffer) {
            Ok(read) => Ok(read > 0),
            Err(e) => {
                self.failed = true;
                Err(TrackerError::ledger(LedgerOperation::Read, &self.path, e))
            }
        }
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R: BufRead> Iterator for LedgerLines<R> {
    type Item = Result<String, TrackerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if !self.header_skipped {
            self.header_skipped = true;
            match self.read_physical(&mut String::new()) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }

        let mut record = String::new();
        match self.read_physical(&mut record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(e)),
        }

        while is_unterminated(&record) {
            match self.read_physical(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => return Some(Err(e)),
            }
        }

        strip_terminator(&mut record);
        Some(Ok(record))
    }
}
