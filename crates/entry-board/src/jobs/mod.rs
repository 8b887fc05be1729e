//! Job browsing: the posting model, the fixed salary bands, filter criteria,
//! and the query engine that filters a catalog and suggests search terms.

pub mod catalog;
pub mod criteria;
pub mod domain;
pub mod query;
pub mod salary;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use criteria::FilterCriteria;
pub use domain::{JobPosting, LocationType, PostingId, UnknownLocationType};
pub use query::{browse, filter_jobs, suggest, BrowseResults, DEFAULT_SUGGESTION_LIMIT};
pub use salary::{parse_salary_figure, SalaryBand, SalaryBands};
