use serde::Serialize;
use tracing::debug;

use super::criteria::FilterCriteria;
use super::domain::JobPosting;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Postings matching every criterion, in catalog order.
pub fn filter_jobs<'a>(
    catalog: &'a [JobPosting],
    criteria: &FilterCriteria,
) -> Vec<&'a JobPosting> {
    let query = criteria.query.to_lowercase();
    let skills: Vec<String> = criteria
        .skills()
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    let matched: Vec<&JobPosting> = catalog
        .iter()
        .filter(|posting| matches_query(posting, &query))
        .filter(|posting| criteria.location.admits(posting.remote))
        .filter(|posting| criteria.salary_band.contains(posting.salary_figure()))
        .filter(|posting| matches_skills(posting, &skills))
        .collect();

    debug!(
        catalog = catalog.len(),
        matched = matched.len(),
        "filtered job catalog"
    );
    matched
}

/// Autocomplete values for the search box: titles, companies, and locations
/// containing `query`, deduplicated in scan order and capped at `limit`.
pub fn suggest(catalog: &[JobPosting], query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    let fields = catalog.iter().flat_map(|posting| {
        [
            posting.title.as_str(),
            posting.company.as_str(),
            posting.location.as_str(),
        ]
    });

    for value in fields {
        if !value.to_lowercase().contains(&needle) {
            continue;
        }
        if suggestions.iter().any(|existing| existing == value) {
            continue;
        }
        suggestions.push(value.to_string());
        if suggestions.len() == limit {
            break;
        }
    }

    suggestions
}

/// Everything the browse screen renders for one criteria change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseResults<'a> {
    pub postings: Vec<&'a JobPosting>,
    pub suggestions: Vec<String>,
}

pub fn browse<'a>(catalog: &'a [JobPosting], criteria: &FilterCriteria) -> BrowseResults<'a> {
    BrowseResults {
        postings: filter_jobs(catalog, criteria),
        suggestions: suggest(catalog, &criteria.query, DEFAULT_SUGGESTION_LIMIT),
    }
}

fn matches_query(posting: &JobPosting, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    [
        &posting.title,
        &posting.company,
        &posting.location,
        &posting.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

fn matches_skills(posting: &JobPosting, required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }

    posting
        .skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .any(|skill| required.contains(&skill))
}
