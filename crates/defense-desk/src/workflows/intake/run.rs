use super::report::{CopyFailure, EntryReport, EntryStatus, RunReport};
use super::workspace::list_pdfs;
use super::{IntakeError, RunMode, SubmissionFolder, Workspace};
use crate::workflows::reconcile::{extract_name, MatchResult, NameReconciler, ReconcileConfig};
use crate::workflows::roster::Roster;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// One pass over the submissions folder: every submission is resolved against
/// the roster and the student folders, and matched PDFs are copied over.
pub struct ReconcileRun<'a> {
    workspace: &'a Workspace,
    roster: &'a Roster,
    config: &'a ReconcileConfig,
}

impl<'a> ReconcileRun<'a> {
    pub fn new(workspace: &'a Workspace, roster: &'a Roster, config: &'a ReconcileConfig) -> Self {
        Self {
            workspace,
            roster,
            config,
        }
    }

    pub fn execute(&self, mode: RunMode) -> Result<RunReport, IntakeError> {
        let targets = self.workspace.target_dirs()?;
        let submissions = self.workspace.submission_dirs()?;
        info!(
            targets = targets.len(),
            submissions = submissions.len(),
            students = self.roster.len(),
            ?mode,
            "starting reconciliation"
        );

        let reconciler = NameReconciler::new(self.roster.names(), &targets, self.config.clone());
        let mut entries = Vec::with_capacity(submissions.len());
        for folder in &submissions {
            entries.push(self.process(&reconciler, folder, mode)?);
        }

        let report = RunReport::new(mode, targets.len(), entries);
        info!(
            copied = report.summary.files_copied,
            unmatched = report.summary.unmatched,
            "reconciliation finished"
        );
        Ok(report)
    }

    fn process(
        &self,
        reconciler: &NameReconciler,
        folder: &SubmissionFolder,
        mode: RunMode,
    ) -> Result<EntryReport, IntakeError> {
        let submission = folder.label.as_str();
        if !folder.readable {
            warn!(submission, "submission folder name is not valid UTF-8");
            return Ok(EntryReport::new(submission, "", EntryStatus::Skipped));
        }

        let extracted = extract_name(submission);
        debug!(submission, extracted = %extracted, "processing submission");

        // An empty name is contained in every roster entry and every folder.
        if extracted.replace('_', " ").trim().is_empty() {
            warn!(submission, "no student name in submission folder name");
            return Ok(EntryReport::new(submission, &extracted, EntryStatus::Skipped));
        }

        let outcome = reconciler.resolve(&extracted);
        let mut entry = match &outcome {
            MatchResult::Matched { directory, .. } => {
                let source = self.workspace.submissions_path().join(submission);
                let target = self.workspace.root().join(directory);
                self.transfer(submission, &extracted, &source, &target, mode)?
            }
            MatchResult::NotFound { .. } => {
                warn!(submission, reason = %outcome.reason(), "submission not matched");
                let mut entry = EntryReport::new(submission, &extracted, EntryStatus::Unmatched);
                entry.suggestions = reconciler.suggestions(&extracted);
                entry
            }
            MatchResult::NotInRoster => {
                warn!(submission, reason = %outcome.reason(), "submission not matched");
                EntryReport::new(submission, &extracted, EntryStatus::Unmatched)
            }
        };

        entry.outcome = Some(outcome);
        Ok(entry)
    }

    fn transfer(
        &self,
        submission: &str,
        extracted: &str,
        source: &Path,
        target: &Path,
        mode: RunMode,
    ) -> Result<EntryReport, IntakeError> {
        let pdfs = list_pdfs(source)?;
        if pdfs.is_empty() {
            warn!(submission, "no PDF files found");
            return Ok(EntryReport::new(submission, extracted, EntryStatus::NoPdfFiles));
        }

        let status = if mode.is_dry_run() {
            EntryStatus::WouldCopy
        } else {
            EntryStatus::Copied
        };
        let mut entry = EntryReport::new(submission, extracted, status);

        for pdf in pdfs {
            let Some(file_name) = pdf.file_name() else {
                continue;
            };
            let display_name = file_name.to_string_lossy().into_owned();

            if mode.is_dry_run() {
                entry.files.push(display_name);
                continue;
            }

            let destination = target.join(file_name);
            match std::fs::copy(&pdf, &destination) {
                Ok(_) => {
                    debug!(file = %display_name, target = %target.display(), "copied");
                    if let Err(err) = preserve_modified(&pdf, &destination) {
                        warn!(
                            file = %display_name,
                            error = %err,
                            "could not keep modification time"
                        );
                    }
                    entry.files.push(display_name);
                }
                Err(err) => {
                    warn!(file = %display_name, error = %err, "copy failed");
                    entry.status = EntryStatus::CopyFailed;
                    entry.failures.push(CopyFailure {
                        file: display_name,
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(entry)
    }
}

/// Carries the source modification time over to a fresh copy.
fn preserve_modified(source: &Path, destination: &Path) -> std::io::Result<()> {
    let modified = std::fs::metadata(source)?.modified()?;
    File::options()
        .write(true)
        .open(destination)?
        .set_modified(modified)
}
