//! The authoritative list of students, read from a CSV export of the
//! committees spreadsheet.

mod parser;

use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("'{column}' column not found in roster")]
    MissingColumn { column: String },
    #[error("no students found in roster")]
    Empty,
}

/// Roster names in source order. Duplicates are kept; each one is an
/// independent candidate during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn from_path<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, column)
    }

    pub fn from_reader<R: Read>(reader: R, column: &str) -> Result<Self, RosterError> {
        Self::from_names(parser::parse_column(reader, column)?)
    }

    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .collect();
        if names.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Student folder name for a roster name: `"Maria Garcia"` -> `"Maria_Garcia"`.
pub fn folder_name(roster_name: &str) -> String {
    roster_name.split_whitespace().collect::<Vec<_>>().join("_")
}
