//! Process table loading.
//!
//! Reads a comma-separated table, one process per line:
//!
//! ```text
//! ProcessID, BurstDuration, ArrivalTime[, Priority]
//! ```
//!
//! Fields are trimmed; blank lines are skipped. A missing priority defaults
//! to 0. Any malformed row fails the whole load.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;

use log::debug;

use crate::models::Process;

const COLUMNS: [&str; 4] = ["ProcessID", "BurstDuration", "ArrivalTime", "Priority"];

/// Errors raised while loading a process table.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    Io(io::Error),
    /// A row does not have 3 or 4 fields.
    InvalidRow {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        fields: usize,
    },
    /// A field is not a base-10 integer.
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// Column name.
        column: &'static str,
        /// Offending text.
        value: String,
        /// Underlying parse error.
        source: ParseIntError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "reading process table: {err}"),
            LoadError::InvalidRow { line, fields } => write!(
                f,
                "line {line}: expected 3 or 4 fields, found {fields}"
            ),
            LoadError::InvalidInteger {
                line,
                column,
                value,
                source,
            } => write!(f, "line {line}: {column} {value:?} is not an integer: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::InvalidRow { .. } => None,
            LoadError::InvalidInteger { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Loads a process table from any buffered reader.
pub fn load_processes<R: BufRead>(reader: R) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        processes.push(parse_row(index + 1, &line)?);
    }

    debug!("loaded {} processes", processes.len());
    Ok(processes)
}

/// Opens and loads a process table file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let file = File::open(path.as_ref())?;
    load_processes(BufReader::new(file))
}

fn parse_row(line: usize, text: &str) -> Result<Process, LoadError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(LoadError::InvalidRow {
            line,
            fields: fields.len(),
        });
    }

    let mut values = [0i64; 4];
    for (column, field) in fields.iter().enumerate() {
        values[column] = field.parse().map_err(|source| LoadError::InvalidInteger {
            line,
            column: COLUMNS[column],
            value: (*field).to_string(),
            source,
        })?;
    }

    let [id, burst, arrival, priority] = values;
    Ok(Process::new(id, arrival, burst).with_priority(priority))
}
