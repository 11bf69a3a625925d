use super::workspace::subdirectories;
use super::{IntakeError, Workspace};
use serde::Serialize;

/// A student folder and the subfolders nested inside it. A nested folder
/// holds the advisor's copy of the defense material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderInventory {
    pub name: String,
    pub nested: Vec<String>,
    pub advisor_copy: bool,
}

pub fn inventory(workspace: &Workspace) -> Result<Vec<FolderInventory>, IntakeError> {
    workspace
        .target_dirs()?
        .into_iter()
        .map(|name| {
            let nested = subdirectories(&workspace.root().join(&name))?;
            Ok(FolderInventory {
                advisor_copy: !nested.is_empty(),
                name,
                nested,
            })
        })
        .collect()
}
