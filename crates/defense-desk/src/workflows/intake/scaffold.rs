use super::{IntakeError, RunMode};
use crate::workflows::roster::{folder_name, Roster};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

/// Ensures every roster student owns a folder under `root`. In dry-run the
/// folders that would be created are listed but not made.
pub fn scaffold(
    root: &Path,
    roster: &Roster,
    mode: RunMode,
) -> Result<ScaffoldReport, IntakeError> {
    if !root.is_dir() {
        return Err(IntakeError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let mut report = ScaffoldReport::default();
    let mut seen = HashSet::new();

    for name in roster.names() {
        let folder = folder_name(name);
        if folder.is_empty() || !seen.insert(folder.clone()) {
            continue;
        }

        let path = root.join(&folder);
        if path.is_dir() {
            report.existing.push(folder);
            continue;
        }

        if !mode.is_dry_run() {
            std::fs::create_dir_all(&path).map_err(|err| IntakeError::io(&path, err))?;
            info!(folder = %folder, "created student folder");
        }
        report.created.push(folder);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_folders_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("Joan_Puig")).expect("create dir");
        let roster = Roster::from_names(["Maria Garcia", "Joan Puig", "Maria  Garcia"])
            .expect("roster");

        let report = scaffold(dir.path(), &roster, RunMode::Apply).expect("scaffold");
        assert_eq!(report.created, vec!["Maria_Garcia"]);
        assert_eq!(report.existing, vec!["Joan_Puig"]);
        assert!(dir.path().join("Maria_Garcia").is_dir());
    }

    #[test]
    fn dry_run_leaves_the_filesystem_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let roster = Roster::from_names(["Núria Vidal"]).expect("roster");

        let report = scaffold(dir.path(), &roster, RunMode::DryRun).expect("scaffold");
        assert_eq!(report.created, vec!["Núria_Vidal"]);
        assert!(!dir.path().join("Núria_Vidal").exists());
    }
}
