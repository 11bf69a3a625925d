use crate::render;
use defense_desk::config::AppConfig;
use defense_desk::error::AppError;
use defense_desk::workflows::intake::{inventory, scaffold, ReconcileRun, RunMode, Workspace};
use defense_desk::workflows::reconcile::{extract_name, MatchResult, NameReconciler};
use defense_desk::workflows::roster::Roster;
use serde::Serialize;
use tracing::info;

fn load_roster(config: &AppConfig) -> Result<Roster, AppError> {
    let path = config.workspace.resolved_roster_path();
    let roster = Roster::from_path(&path, &config.workspace.roster_column)?;
    info!(path = %path.display(), students = roster.len(), "roster loaded");
    Ok(roster)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_reconcile(config: &AppConfig, dry_run: bool, json: bool) -> Result<(), AppError> {
    let roster = load_roster(config)?;
    let workspace = Workspace::from_config(&config.workspace);
    let report = ReconcileRun::new(&workspace, &roster, &config.reconcile)
        .execute(RunMode::from_dry_run(dry_run))?;

    if json {
        print_json(&report)
    } else {
        render::render_run_report(&report);
        Ok(())
    }
}

pub(crate) fn run_scaffold(config: &AppConfig, dry_run: bool) -> Result<(), AppError> {
    let roster = load_roster(config)?;
    let mode = RunMode::from_dry_run(dry_run);
    let report = scaffold(&config.workspace.root, &roster, mode)?;
    render::render_scaffold(&report, mode);
    Ok(())
}

pub(crate) fn run_inventory(config: &AppConfig, json: bool) -> Result<(), AppError> {
    let folders = inventory(&Workspace::from_config(&config.workspace))?;
    if json {
        print_json(&folders)
    } else {
        render::render_inventory(&folders);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MatchView<'a> {
    label: &'a str,
    extracted_name: String,
    #[serde(flatten)]
    outcome: MatchResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

pub(crate) fn run_match(config: &AppConfig, label: &str, json: bool) -> Result<(), AppError> {
    let roster = load_roster(config)?;
    let targets = Workspace::from_config(&config.workspace).target_dirs()?;
    let reconciler = NameReconciler::new(roster.names(), &targets, config.reconcile.clone());

    let extracted_name = extract_name(label);
    let outcome = reconciler.resolve(&extracted_name);
    let suggestions = match outcome {
        MatchResult::NotFound { .. } => reconciler.suggestions(&extracted_name),
        MatchResult::Matched { .. } | MatchResult::NotInRoster => Vec::new(),
    };
    let view = MatchView {
        label,
        extracted_name,
        outcome,
        suggestions,
    };

    if json {
        print_json(&view)
    } else {
        render::render_match(&view.extracted_name, &view.outcome, &view.suggestions);
        Ok(())
    }
}
