use super::RunMode;
use crate::workflows::reconcile::MatchResult;
use chrono::{DateTime, Local};
use serde::Serialize;

/// What happened to one submission folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Copied,
    WouldCopy,
    CopyFailed,
    NoPdfFiles,
    Unmatched,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailure {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub submission: String,
    pub extracted_name: String,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MatchResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CopyFailure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl EntryReport {
    pub(crate) fn new(submission: &str, extracted_name: &str, status: EntryStatus) -> Self {
        Self {
            submission: submission.to_string(),
            extracted_name: extracted_name.to_string(),
            status,
            outcome: None,
            files: Vec::new(),
            failures: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn reason(&self) -> String {
        match (&self.status, &self.outcome) {
            (EntryStatus::Skipped, _) => "no student name could be extracted".to_string(),
            (EntryStatus::NoPdfFiles, _) => "no PDF files found".to_string(),
            (_, Some(outcome)) => outcome.reason(),
            (_, None) => String::new(),
        }
    }

    /// Target folder for matched entries.
    pub fn directory(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(MatchResult::directory)
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self.status, EntryStatus::Unmatched | EntryStatus::Skipped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub target_directories: usize,
    pub submissions: usize,
    pub files_copied: usize,
    pub copy_failures: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub without_pdfs: usize,
}

/// Outcome of a whole reconciliation pass.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Local>,
    pub mode: RunMode,
    pub summary: RunSummary,
    pub entries: Vec<EntryReport>,
}

impl RunReport {
    pub(crate) fn new(mode: RunMode, target_directories: usize, entries: Vec<EntryReport>) -> Self {
        let summary = RunSummary {
            target_directories,
            submissions: entries.len(),
            files_copied: entries
                .iter()
                .filter(|entry| entry.status != EntryStatus::WouldCopy)
                .map(|entry| entry.files.len())
                .sum(),
            copy_failures: entries.iter().map(|entry| entry.failures.len()).sum(),
            matched: entries
                .iter()
                .filter(|entry| entry.outcome.as_ref().is_some_and(MatchResult::is_matched))
                .count(),
            unmatched: entries.iter().filter(|entry| entry.is_unmatched()).count(),
            without_pdfs: entries
                .iter()
                .filter(|entry| entry.status == EntryStatus::NoPdfFiles)
                .count(),
        };

        Self {
            generated_at: Local::now(),
            mode,
            summary,
            entries,
        }
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries.iter().filter(|entry| entry.is_unmatched())
    }

    pub fn all_matched(&self) -> bool {
        self.summary.unmatched == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(submission: &str, files: &[&str], status: EntryStatus) -> EntryReport {
        let mut entry = EntryReport::new(submission, "Maria_Garcia", status);
        entry.outcome = Some(MatchResult::Matched {
            directory: "Maria_Garcia".into(),
            roster_name: "Maria Garcia".into(),
        });
        entry.files = files.iter().map(|file| file.to_string()).collect();
        entry
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut not_found = EntryReport::new("Puig, Joan_1", "Joan_Puig", EntryStatus::Unmatched);
        not_found.outcome = Some(MatchResult::NotFound {
            roster_name: "Joan Puig".into(),
        });

        let report = RunReport::new(
            RunMode::Apply,
            4,
            vec![
                matched("Garcia, Maria_1", &["a.pdf", "b.pdf"], EntryStatus::Copied),
                matched("Garcia, Maria_2", &[], EntryStatus::NoPdfFiles),
                not_found,
                EntryReport::new("_", "_", EntryStatus::Skipped),
            ],
        );

        assert_eq!(report.summary.submissions, 4);
        assert_eq!(report.summary.files_copied, 2);
        assert_eq!(report.summary.matched, 2);
        assert_eq!(report.summary.unmatched, 2);
        assert_eq!(report.summary.without_pdfs, 1);
        assert!(!report.all_matched());
        assert_eq!(report.unmatched().count(), 2);
    }

    #[test]
    fn dry_run_files_are_not_counted_as_copied() {
        let report = RunReport::new(
            RunMode::DryRun,
            1,
            vec![matched("Garcia, Maria_1", &["a.pdf"], EntryStatus::WouldCopy)],
        );
        assert_eq!(report.summary.files_copied, 0);
        assert!(report.all_matched());
    }

    #[test]
    fn reason_prefers_entry_specific_explanations() {
        let entry = matched("Garcia, Maria_2", &[], EntryStatus::NoPdfFiles);
        assert_eq!(entry.reason(), "no PDF files found");
        assert_eq!(entry.directory(), Some("Maria_Garcia"));

        let entry = matched("Garcia, Maria_1", &["a.pdf"], EntryStatus::Copied);
        assert_eq!(entry.reason(), "matched with roster student: Maria Garcia");
    }
}
