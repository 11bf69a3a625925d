//! Name reconciliation: associates loosely formatted submission labels with a
//! roster member and one of the existing student folders.

mod extract;
mod matcher;
mod normalizer;

pub use extract::extract_name;
pub use matcher::NameReconciler;
pub use normalizer::normalize;

use serde::{Deserialize, Serialize};

/// Knobs for a reconciliation pass, passed in at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Maximum number of folders listed for an entry whose folder was not found.
    pub suggestion_limit: usize,
    /// Tokens shorter than this must equal a whole word of the folder name
    /// instead of appearing anywhere inside it. Zero disables the rule.
    pub min_token_len: usize,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 3,
            min_token_len: 0,
        }
    }
}

/// Outcome of resolving one candidate entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchResult {
    Matched {
        directory: String,
        roster_name: String,
    },
    NotInRoster,
    NotFound {
        roster_name: String,
    },
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn directory(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { directory, .. } => Some(directory),
            MatchResult::NotInRoster | MatchResult::NotFound { .. } => None,
        }
    }

    pub fn roster_name(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { roster_name, .. } | MatchResult::NotFound { roster_name } => {
                Some(roster_name)
            }
            MatchResult::NotInRoster => None,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            MatchResult::Matched { roster_name, .. } => {
                format!("matched with roster student: {roster_name}")
            }
            MatchResult::NotInRoster => "student not found in roster".to_string(),
            MatchResult::NotFound { roster_name } => {
                format!("directory not found for roster student: {roster_name}")
            }
        }
    }
}

/// One-shot resolution with the default configuration.
pub fn resolve<R, D>(extracted_name: &str, roster_names: &[R], directory_names: &[D]) -> MatchResult
where
    R: AsRef<str>,
    D: AsRef<str>,
{
    NameReconciler::new(roster_names, directory_names, ReconcileConfig::default())
        .resolve(extracted_name)
}

/// One-shot suggestion pass with the given configuration.
pub fn suggest<D: AsRef<str>>(
    extracted_name: &str,
    directory_names: &[D],
    config: &ReconcileConfig,
) -> Vec<String> {
    NameReconciler::new::<&str, D>(&[], directory_names, config.clone()).suggestions(extracted_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_mentions_the_roster_student() {
        let found = MatchResult::NotFound {
            roster_name: "Maria Garcia".into(),
        };
        assert_eq!(
            found.reason(),
            "directory not found for roster student: Maria Garcia"
        );
        assert_eq!(found.roster_name(), Some("Maria Garcia"));
        assert_eq!(found.directory(), None);
        assert_eq!(MatchResult::NotInRoster.roster_name(), None);
    }

    #[test]
    fn serializes_with_outcome_tag() {
        let matched = MatchResult::Matched {
            directory: "Maria_Garcia".into(),
            roster_name: "Maria Garcia".into(),
        };
        let value = serde_json::to_value(&matched).expect("serialize");
        assert_eq!(value["outcome"], "matched");
        assert_eq!(value["directory"], "Maria_Garcia");

        let value = serde_json::to_value(MatchResult::NotInRoster).expect("serialize");
        assert_eq!(value["outcome"], "not_in_roster");
    }
}
