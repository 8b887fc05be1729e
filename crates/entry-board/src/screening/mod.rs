//! Banned-term screening for listings authored on the posting form.
//!
//! Text is normalized to lowercase letters and compared word by word against
//! the configured banned terms with a bounded edit distance, so near misses
//! ("experiencd", "yr") are caught alongside exact hits.

pub mod distance;
pub mod normalizer;
pub(crate) mod posting;
pub(crate) mod screener;
pub(crate) mod terms;

#[cfg(test)]
mod tests;

pub use distance::{edit_distance, within_distance};
pub use normalizer::{normalize_passage, normalize_term, passage_tokens};
pub use posting::{PostingDraft, PostingField, PostingGuard, PostingRejection, PostingViolation};
pub use screener::{is_passage_allowed, is_term_allowed, TermMatch, TermScreener};
pub use terms::BannedTermSet;
