use crate::infra::print_json;
use clap::Args;
use entry_board::error::AppError;
use entry_board::jobs::{
    browse, suggest, Catalog, FilterCriteria, JobPosting, LocationType, SalaryBands,
    DEFAULT_SUGGESTION_LIMIT,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct BrowseArgs {
    /// Catalog export (.json or .csv)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Free-text search over title, company, location, and description
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// any, remote, or onsite
    #[arg(long, default_value = "any")]
    pub(crate) location: LocationType,
    /// Salary band label (see `bands`)
    #[arg(long)]
    pub(crate) salary: Option<String>,
    /// Required skill; repeat to accept any of several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Emit JSON instead of a readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Catalog export (.json or .csv)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    pub(crate) query: String,
    #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub(crate) limit: usize,
}

pub(crate) fn run_browse(args: BrowseArgs) -> Result<(), AppError> {
    let BrowseArgs {
        catalog,
        query,
        location,
        salary,
        skills,
        json,
    } = args;

    let catalog = Catalog::from_path(&catalog)?;

    let mut criteria = FilterCriteria::new();
    criteria.set_query(query);
    criteria.set_location(location);
    if let Some(label) = salary {
        let band = SalaryBands::find(&label).ok_or_else(|| {
            AppError::Usage(format!(
                "unknown salary band '{label}' (run `bands` to list them)"
            ))
        })?;
        criteria.set_salary_band(band);
    }
    for skill in &skills {
        criteria.add_skill(skill);
    }

    let results = browse(catalog.postings(), &criteria);
    if json {
        return print_json(&results);
    }

    println!(
        "{} of {} postings match",
        results.postings.len(),
        catalog.len()
    );
    for posting in &results.postings {
        render_posting(posting);
    }
    if !results.suggestions.is_empty() {
        println!("\nDid you mean: {}", results.suggestions.join(", "));
    }
    Ok(())
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let catalog = Catalog::from_path(&args.catalog)?;
    for suggestion in suggest(catalog.postings(), &args.query, args.limit) {
        println!("{suggestion}");
    }
    Ok(())
}

pub(crate) fn list_bands() {
    for band in SalaryBands::standard() {
        match band.max {
            Some(max) => println!("{:<20} {} - {}", band.label, band.min, max),
            None => println!("{:<20} {}+", band.label, band.min),
        }
    }
}

fn render_posting(posting: &JobPosting) {
    let mode = if posting.remote { "remote" } else { "on-site" };
    println!(
        "- [{}] {} @ {} ({}, {}) | {}",
        posting.id, posting.title, posting.company, posting.location, mode, posting.salary
    );
    if !posting.skills.is_empty() {
        println!("    skills: {}", posting.skills.join(", "));
    }
}
