//! Filesystem side of a reconciliation pass: scanning the workspace, copying
//! submitted PDFs into student folders, and the reports built from it.

mod inventory;
mod report;
mod run;
mod scaffold;
mod workspace;

use serde::Serialize;
use std::path::PathBuf;

pub use inventory::{inventory, FolderInventory};
pub use report::{CopyFailure, EntryReport, EntryStatus, RunReport, RunSummary};
pub use run::ReconcileRun;
pub use scaffold::{scaffold, ScaffoldReport};
pub use workspace::{list_pdfs, SubmissionFolder, Workspace};

/// Whether a pass touches the filesystem or only reports what it would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    Apply,
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else {
            Self::Apply
        }
    }

    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("workspace root not found: {}", path.display())]
    MissingRoot { path: PathBuf },
    #[error("submissions directory not found: {}", path.display())]
    MissingSubmissions { path: PathBuf },
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntakeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
