use super::normalizer::{normalize, spaced, tokens};
use super::{MatchResult, ReconcileConfig};

/// A name paired with its comparison form.
#[derive(Debug, Clone)]
struct Indexed {
    original: String,
    normalized: String,
}

impl Indexed {
    fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            normalized: normalize(original),
        }
    }
}

/// Matches extracted candidate names against a roster and a set of target
/// folders. Both lists are captured once and never change afterwards.
#[derive(Debug, Clone)]
pub struct NameReconciler {
    roster: Vec<Indexed>,
    directories: Vec<Indexed>,
    config: ReconcileConfig,
}

impl NameReconciler {
    pub fn new<R, D>(roster_names: &[R], directory_names: &[D], config: ReconcileConfig) -> Self
    where
        R: AsRef<str>,
        D: AsRef<str>,
    {
        Self {
            roster: roster_names
                .iter()
                .map(|name| Indexed::new(name.as_ref()))
                .collect(),
            directories: directory_names
                .iter()
                .map(|name| Indexed::new(name.as_ref()))
                .collect(),
            config,
        }
    }

    /// Roster gate first, then the folder scan. The first roster entry and the
    /// first folder that qualify win; input order is the only tie-break.
    pub fn resolve(&self, extracted_name: &str) -> MatchResult {
        let normalized = normalize(extracted_name);
        let spaced_name = spaced(&normalized);

        let Some(roster_name) = self.roster_member(&spaced_name) else {
            return MatchResult::NotInRoster;
        };

        let name_tokens = tokens(&normalized);
        for directory in &self.directories {
            if normalized == directory.normalized
                || self.tokens_contained(&name_tokens, &directory.normalized)
            {
                return MatchResult::Matched {
                    directory: directory.original.clone(),
                    roster_name: roster_name.to_string(),
                };
            }
        }

        MatchResult::NotFound {
            roster_name: roster_name.to_string(),
        }
    }

    /// Folders sharing at least one token with the extracted name, capped at
    /// the configured limit. Advisory only.
    pub fn suggestions(&self, extracted_name: &str) -> Vec<String> {
        let name_tokens: Vec<String> = tokens(&normalize(extracted_name))
            .into_iter()
            .filter(|token| !self.is_short(token))
            .collect();
        if name_tokens.is_empty() {
            return Vec::new();
        }

        self.directories
            .iter()
            .filter(|directory| {
                name_tokens
                    .iter()
                    .any(|token| directory.normalized.contains(token.as_str()))
            })
            .take(self.config.suggestion_limit)
            .map(|directory| directory.original.clone())
            .collect()
    }

    fn roster_member(&self, spaced_name: &str) -> Option<&str> {
        self.roster
            .iter()
            .find(|entry| {
                spaced_name.contains(entry.normalized.as_str())
                    || entry.normalized.contains(spaced_name)
            })
            .map(|entry| entry.original.as_str())
    }

    fn tokens_contained(&self, name_tokens: &[String], directory_normalized: &str) -> bool {
        let directory_tokens = tokens(directory_normalized);
        let joined = directory_tokens.join(" ");

        name_tokens.iter().all(|token| {
            if self.is_short(token) {
                directory_tokens.iter().any(|word| word == token)
            } else {
                joined.contains(token.as_str())
            }
        })
    }

    fn is_short(&self, token: &str) -> bool {
        self.config.min_token_len > 0 && token.chars().count() < self.config.min_token_len
    }
}
