use super::normalizer::normalize_term;
use serde::Serialize;

/// Immutable, normalized list of banned terms.
///
/// Entries are lowercased and reduced to their letters on construction;
/// entries that end up empty are dropped, as are later duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannedTermSet {
    terms: Vec<String>,
}

impl BannedTermSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = normalize_term(term.as_ref());
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for BannedTermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
