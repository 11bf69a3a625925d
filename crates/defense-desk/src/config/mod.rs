use crate::workflows::reconcile::ReconcileConfig;
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_SUBMISSIONS_DIR: &str = "ZZZmemories";
pub const DEFAULT_ROSTER_PATH: &str = "committees.csv";
pub const DEFAULT_ROSTER_COLUMN: &str = "Author";

/// Distinguishes runtime behavior for different stages of the desk tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub workspace: WorkspaceConfig,
    pub reconcile: ReconcileConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let root = env::var("DESK_ROOT").unwrap_or_else(|_| ".".to_string());
        let submissions_dir = env::var("DESK_SUBMISSIONS_DIR")
            .unwrap_or_else(|_| DEFAULT_SUBMISSIONS_DIR.to_string());
        let roster_path =
            env::var("DESK_ROSTER_PATH").unwrap_or_else(|_| DEFAULT_ROSTER_PATH.to_string());
        let roster_column =
            env::var("DESK_ROSTER_COLUMN").unwrap_or_else(|_| DEFAULT_ROSTER_COLUMN.to_string());

        let defaults = ReconcileConfig::default();
        let suggestion_limit = parse_count("DESK_SUGGESTION_LIMIT", defaults.suggestion_limit)?;
        let min_token_len = parse_count("DESK_MIN_TOKEN_LEN", defaults.min_token_len)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            workspace: WorkspaceConfig {
                root: PathBuf::from(root),
                submissions_dir,
                roster_path: PathBuf::from(roster_path),
                roster_column,
            },
            reconcile: ReconcileConfig {
                suggestion_limit,
                min_token_len,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_count(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Locations of the student folders, the submissions folder, and the roster.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub root: PathBuf,
    pub submissions_dir: String,
    pub roster_path: PathBuf,
    pub roster_column: String,
}

impl WorkspaceConfig {
    pub fn submissions_path(&self) -> PathBuf {
        self.root.join(&self.submissions_dir)
    }

    /// Relative roster paths are resolved against the workspace root.
    pub fn resolved_roster_path(&self) -> PathBuf {
        if self.roster_path.is_absolute() {
            self.roster_path.clone()
        } else {
            self.root.join(&self.roster_path)
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
