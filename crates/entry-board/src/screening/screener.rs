use serde::Serialize;
use tracing::debug;

use super::distance::{edit_distance, within_distance};
use super::normalizer::{normalize_term, passage_tokens};
use super::terms::BannedTermSet;
use crate::config::ScreeningConfig;

/// A token that came within the configured distance of a banned term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
    pub token: String,
    pub banned_term: String,
    pub distance: usize,
}

/// Whether a single term is clear of every banned term.
///
/// A term that normalizes to nothing is allowed; callers that need a value
/// enforce that separately.
pub fn is_term_allowed(term: &str, banned: &BannedTermSet, threshold: usize) -> bool {
    let normalized = normalize_term(term);
    if normalized.is_empty() {
        return true;
    }

    !banned
        .iter()
        .any(|banned_term| within_distance(&normalized, banned_term, threshold))
}

/// Whether every word of a passage is clear of every banned term.
pub fn is_passage_allowed(text: &str, banned: &BannedTermSet, threshold: usize) -> bool {
    passage_tokens(text).iter().all(|token| {
        !banned
            .iter()
            .any(|banned_term| within_distance(token, banned_term, threshold))
    })
}

/// Screener bound to one banned-term policy.
#[derive(Debug, Clone)]
pub struct TermScreener {
    banned: BannedTermSet,
    max_distance: usize,
}

impl Default for TermScreener {
    fn default() -> Self {
        Self::from_config(&ScreeningConfig::default())
    }
}

impl TermScreener {
    pub fn new(banned: BannedTermSet, max_distance: usize) -> Self {
        Self {
            banned,
            max_distance,
        }
    }

    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self::new(
            BannedTermSet::new(&config.banned_terms),
            config.max_distance,
        )
    }

    pub fn banned_terms(&self) -> &BannedTermSet {
        &self.banned
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn is_term_allowed(&self, term: &str) -> bool {
        is_term_allowed(term, &self.banned, self.max_distance)
    }

    pub fn is_passage_allowed(&self, text: &str) -> bool {
        is_passage_allowed(text, &self.banned, self.max_distance)
    }

    /// Every banned term the normalized `term` comes close to.
    pub fn term_matches(&self, term: &str) -> Vec<TermMatch> {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            return Vec::new();
        }
        self.matches_for(&[normalized])
    }

    /// Every (token, banned term) pair that trips the policy, in token order.
    pub fn passage_matches(&self, text: &str) -> Vec<TermMatch> {
        self.matches_for(&passage_tokens(text))
    }

    fn matches_for(&self, tokens: &[String]) -> Vec<TermMatch> {
        let mut matches = Vec::new();
        for token in tokens {
            for banned_term in self.banned.iter() {
                if !within_distance(token, banned_term, self.max_distance) {
                    continue;
                }
                let distance = edit_distance(token, banned_term);
                debug!(%token, %banned_term, distance, "banned term matched");
                matches.push(TermMatch {
                    token: token.clone(),
                    banned_term: banned_term.to_string(),
                    distance,
                });
            }
        }
        matches
    }
}
