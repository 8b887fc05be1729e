//! Screening and browsing core for an entry-level job board.
//!
//! Two independent halves live here: the fuzzy banned-term screener used when a
//! listing is authored, and the query engine that filters an already-loaded
//! catalog and offers autocomplete suggestions while browsing.

pub mod config;
pub mod error;
pub mod jobs;
pub mod screening;
pub mod telemetry;

pub use jobs::{
    browse, filter_jobs, suggest, BrowseResults, Catalog, FilterCriteria, JobPosting,
    LocationType, PostingId, SalaryBand, SalaryBands,
};
pub use screening::{is_passage_allowed, is_term_allowed, BannedTermSet, TermScreener};
