use defense_desk::workflows::intake::{
    EntryReport, EntryStatus, FolderInventory, RunMode, RunReport, ScaffoldReport,
};
use defense_desk::workflows::reconcile::MatchResult;

pub(crate) fn render_run_report(report: &RunReport) {
    let summary = &report.summary;
    println!("Found {} student directories", summary.target_directories);
    println!("Found {} submission folders", summary.submissions);
    if report.mode == RunMode::DryRun {
        println!("Dry run: no files were copied");
    }

    println!("\nSummary:");
    match report.mode {
        RunMode::Apply => println!("- Copied: {} PDF files", summary.files_copied),
        RunMode::DryRun => println!(
            "- Would copy: {} PDF files",
            report
                .entries
                .iter()
                .filter(|entry| entry.status == EntryStatus::WouldCopy)
                .map(|entry| entry.files.len())
                .sum::<usize>()
        ),
    }
    println!("- Matched: {} submissions", summary.matched);
    println!("- Not matched: {} submissions", summary.unmatched);
    if summary.without_pdfs > 0 {
        println!("- Matched without PDF files: {}", summary.without_pdfs);
    }
    if summary.copy_failures > 0 {
        println!("- Copy failures: {}", summary.copy_failures);
    }

    let attention: Vec<&EntryReport> = report
        .entries
        .iter()
        .filter(|entry| {
            matches!(
                entry.status,
                EntryStatus::NoPdfFiles | EntryStatus::CopyFailed
            )
        })
        .collect();
    if !attention.is_empty() {
        println!("\nNeeds attention ({}):", attention.len());
        for entry in attention {
            println!(
                "- {} -> {}: {}",
                entry.submission,
                entry.directory().unwrap_or("?"),
                entry.reason()
            );
            for failure in &entry.failures {
                println!("    {}: {}", failure.file, failure.error);
            }
        }
    }

    if report.all_matched() {
        println!("\nAll submissions matched a student folder");
        return;
    }

    let unmatched: Vec<&EntryReport> = report.unmatched().collect();
    println!("\nSubmissions not copied ({}):", unmatched.len());
    println!("{}", "-".repeat(60));
    for (index, entry) in unmatched.iter().enumerate() {
        println!("{:2}. {}", index + 1, entry.extracted_name);
        println!("    Submission folder: {}", entry.submission);
        println!("    Reason: {}", entry.reason());
        if matches!(entry.outcome, Some(MatchResult::NotFound { .. })) {
            render_suggestions(&entry.suggestions);
        }
    }
}

fn render_suggestions(suggestions: &[String]) {
    println!("    Folders that might match:");
    if suggestions.is_empty() {
        println!("      - no similar folders found");
    }
    for suggestion in suggestions {
        println!("      - {suggestion}");
    }
}

pub(crate) fn render_scaffold(report: &ScaffoldReport, mode: RunMode) {
    let verb = match mode {
        RunMode::Apply => "Created",
        RunMode::DryRun => "Would create",
    };
    println!("{verb} {} student folders", report.created.len());
    for folder in &report.created {
        println!("- {folder}");
    }
    println!("{} folders already present", report.existing.len());
}

pub(crate) fn render_inventory(folders: &[FolderInventory]) {
    println!("Found {} student folders:", folders.len());
    for (index, folder) in folders.iter().enumerate() {
        let marker = if folder.advisor_copy { " (advisor)" } else { "" };
        println!("{:3}. {}{}", index + 1, folder.name, marker);
        for nested in &folder.nested {
            println!("       - {nested}");
        }
    }
}

pub(crate) fn render_match(extracted_name: &str, outcome: &MatchResult, suggestions: &[String]) {
    println!("Extracted name: {extracted_name}");
    if let Some(roster_name) = outcome.roster_name() {
        println!("Roster student: {roster_name}");
    }
    match outcome {
        MatchResult::Matched { directory, .. } => {
            println!("Folder: {directory}");
            println!("Reason: {}", outcome.reason());
        }
        MatchResult::NotInRoster => println!("Reason: {}", outcome.reason()),
        MatchResult::NotFound { .. } => {
            println!("Reason: {}", outcome.reason());
            render_suggestions(suggestions);
        }
    }
}
