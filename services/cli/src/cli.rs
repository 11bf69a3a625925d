use crate::commands::{run_inventory, run_match, run_reconcile, run_scaffold};
use clap::{Args, Parser, Subcommand};
use defense_desk::config::{AppConfig, WorkspaceConfig};
use defense_desk::error::AppError;
use defense_desk::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "defense-desk",
    about = "Reconcile thesis submissions with the defense roster and student folders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match submission folders to student folders and copy their PDFs
    Reconcile(ReconcileArgs),
    /// Create one folder per roster student
    Scaffold(ScaffoldArgs),
    /// List student folders and the subfolders nested inside them
    Inventory(InventoryArgs),
    /// Resolve a single submission label and explain the outcome
    Match(MatchArgs),
}

/// Overrides for the workspace settings loaded from the environment.
#[derive(Args, Debug, Default)]
pub(crate) struct WorkspaceArgs {
    /// Folder holding the student folders (DESK_ROOT)
    #[arg(long)]
    pub(crate) root: Option<PathBuf>,
    /// Name of the submissions folder inside the root (DESK_SUBMISSIONS_DIR)
    #[arg(long)]
    pub(crate) submissions: Option<String>,
    /// Roster CSV export (DESK_ROSTER_PATH)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Roster column holding the student names (DESK_ROSTER_COLUMN)
    #[arg(long)]
    pub(crate) column: Option<String>,
}

impl WorkspaceArgs {
    fn apply(self, config: &mut WorkspaceConfig) {
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(submissions) = self.submissions {
            config.submissions_dir = submissions;
        }
        if let Some(roster) = self.roster {
            config.roster_path = roster;
        }
        if let Some(column) = self.column {
            config.roster_column = column;
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ReconcileArgs {
    #[command(flatten)]
    pub(crate) workspace: WorkspaceArgs,
    /// Report what would be copied without touching any folder
    #[arg(long)]
    pub(crate) dry_run: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Override the number of suggested folders per unmatched submission
    #[arg(long)]
    pub(crate) suggestions: Option<usize>,
    /// Short name tokens must equal a whole folder word (0 disables)
    #[arg(long)]
    pub(crate) min_token_len: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct ScaffoldArgs {
    #[command(flatten)]
    pub(crate) workspace: WorkspaceArgs,
    /// List the folders that would be created without creating them
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InventoryArgs {
    #[command(flatten)]
    pub(crate) workspace: WorkspaceArgs,
    /// Print the inventory as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Submission label, e.g. "Garcia, Maria_12345_assignsubmission_file"
    pub(crate) label: String,
    #[command(flatten)]
    pub(crate) workspace: WorkspaceArgs,
    /// Print the outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "defense desk starting");

    match cli.command {
        Command::Reconcile(mut args) => {
            std::mem::take(&mut args.workspace).apply(&mut config.workspace);
            if let Some(limit) = args.suggestions {
                config.reconcile.suggestion_limit = limit;
            }
            if let Some(min_token_len) = args.min_token_len {
                config.reconcile.min_token_len = min_token_len;
            }
            run_reconcile(&config, args.dry_run, args.json)
        }
        Command::Scaffold(mut args) => {
            std::mem::take(&mut args.workspace).apply(&mut config.workspace);
            run_scaffold(&config, args.dry_run)
        }
        Command::Inventory(mut args) => {
            std::mem::take(&mut args.workspace).apply(&mut config.workspace);
            run_inventory(&config, args.json)
        }
        Command::Match(mut args) => {
            std::mem::take(&mut args.workspace).apply(&mut config.workspace);
            run_match(&config, &args.label, args.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_reconcile_overrides() {
        let cli = Cli::try_parse_from([
            "defense-desk",
            "reconcile",
            "--root",
            "/srv/defenses",
            "--column",
            "Student",
            "--dry-run",
            "--suggestions",
            "5",
        ])
        .expect("arguments parse");

        let Command::Reconcile(args) = cli.command else {
            panic!("expected reconcile command");
        };
        assert!(args.dry_run);
        assert!(!args.json);
        assert_eq!(args.suggestions, Some(5));

        let mut workspace = WorkspaceConfig {
            root: PathBuf::from("."),
            submissions_dir: "ZZZmemories".into(),
            roster_path: PathBuf::from("committees.csv"),
            roster_column: "Author".into(),
        };
        args.workspace.apply(&mut workspace);
        assert_eq!(workspace.root, PathBuf::from("/srv/defenses"));
        assert_eq!(workspace.roster_column, "Student");
        assert_eq!(workspace.submissions_dir, "ZZZmemories");
    }

    #[test]
    fn match_takes_label_positionally() {
        let cli = Cli::try_parse_from(["defense-desk", "match", "Garcia, Maria_1", "--json"])
            .expect("arguments parse");
        let Command::Match(args) = cli.command else {
            panic!("expected match command");
        };
        assert_eq!(args.label, "Garcia, Maria_1");
        assert!(args.json);
    }
}
