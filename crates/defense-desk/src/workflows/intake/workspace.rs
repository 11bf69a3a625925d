use super::IntakeError;
use crate::config::WorkspaceConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::warn;

const IGNORED_DIRS: &[&str] = &["__pycache__"];

/// The folder holding one subfolder per student plus the submissions folder.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    submissions_dir: String,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>, submissions_dir: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            submissions_dir: submissions_dir.into(),
        }
    }

    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self::new(config.root.clone(), config.submissions_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn submissions_path(&self) -> PathBuf {
        self.root.join(&self.submissions_dir)
    }

    /// Student folders: visible subdirectories of the root other than the
    /// submissions folder, sorted by name.
    pub fn target_dirs(&self) -> Result<Vec<String>, IntakeError> {
        if !self.root.is_dir() {
            return Err(IntakeError::MissingRoot {
                path: self.root.clone(),
            });
        }

        Ok(subdirectories(&self.root)?
            .into_iter()
            .filter(|name| {
                name != &self.submissions_dir && !IGNORED_DIRS.contains(&name.as_str())
            })
            .collect())
    }

    /// Every folder inside the submissions folder, hidden ones included,
    /// sorted by label.
    pub fn submission_dirs(&self) -> Result<Vec<SubmissionFolder>, IntakeError> {
        let path = self.submissions_path();
        if !path.is_dir() {
            return Err(IntakeError::MissingSubmissions { path });
        }

        let mut folders: Vec<SubmissionFolder> = directory_names(&path)?
            .into_iter()
            .map(|raw| match raw.into_string() {
                Ok(label) => SubmissionFolder {
                    label,
                    readable: true,
                },
                Err(raw) => SubmissionFolder {
                    label: raw.to_string_lossy().into_owned(),
                    readable: false,
                },
            })
            .collect();
        folders.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(folders)
    }
}

/// A folder found inside the submissions folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFolder {
    /// Folder name, lossily decoded when it is not valid UTF-8.
    pub label: String,
    /// False when the name is not valid UTF-8; the label then no longer names
    /// the folder on disk.
    pub readable: bool,
}

/// Visible subdirectory names of `path`, sorted. Names that are not valid
/// UTF-8 are skipped with a warning.
pub(crate) fn subdirectories(path: &Path) -> Result<Vec<String>, IntakeError> {
    let mut names = Vec::new();
    for raw in directory_names(path)? {
        match raw.into_string() {
            Ok(name) if name.starts_with('.') => {}
            Ok(name) => names.push(name),
            Err(raw) => warn!(name = ?raw, "skipping folder with non UTF-8 name"),
        }
    }

    names.sort();
    Ok(names)
}

fn directory_names(path: &Path) -> Result<Vec<OsString>, IntakeError> {
    let entries = std::fs::read_dir(path).map_err(|err| IntakeError::io(path, err))?;
    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|err| IntakeError::io(path, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| IntakeError::io(entry.path(), err))?;
        if file_type.is_dir() {
            names.push(entry.file_name());
        }
    }

    Ok(names)
}

/// PDF files directly inside `folder`, extension matched case-insensitively.
pub fn list_pdfs(folder: &Path) -> Result<Vec<PathBuf>, IntakeError> {
    let entries = std::fs::read_dir(folder).map_err(|err| IntakeError::io(folder, err))?;
    let mut pdfs = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|err| IntakeError::io(folder, err))?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            pdfs.push(path);
        }
    }

    pdfs.sort();
    Ok(pdfs)
}
