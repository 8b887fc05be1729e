use chrono::NaiveDate;
use entry_board::config::ScreeningConfig;
use entry_board::jobs::{Catalog, PostingId};
use entry_board::screening::{
    edit_distance, is_passage_allowed, is_term_allowed, BannedTermSet, PostingDraft,
    PostingField, PostingGuard, PostingViolation, TermScreener,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

fn retail_draft() -> PostingDraft {
    PostingDraft {
        title: "Retail Sales Trainee".to_string(),
        company: "Main Street Outfitters".to_string(),
        location: "Cedar Rapids, IA".to_string(),
        description: "Paid training for career changers.".to_string(),
        salary: "$34,000".to_string(),
        deadline: "2025-10-31".to_string(),
        remote: false,
        skills: vec!["Customer Service".to_string()],
        benefits: vec!["Employee discount".to_string()],
        tags: Vec::new(),
    }
}

#[test]
fn documented_screening_examples_hold() {
    let banned = BannedTermSet::new(["experience"]);
    assert!(!is_term_allowed("experience", &banned, 2));
    assert!(!is_term_allowed("experiencd", &banned, 2));
    assert!(is_term_allowed("baking", &banned, 2));

    assert!(!is_passage_allowed("no prior experience needed", &banned, 2));
    assert!(is_passage_allowed("great team environment", &banned, 2));

    assert_eq!(edit_distance("experiencd", "experience"), 1);
}

#[test]
fn default_policy_flags_catalog_listings_that_ask_for_seniority() {
    let catalog = Catalog::from_json_reader(include_str!("fixtures/catalog.json").as_bytes())
        .expect("fixture catalog imports");
    let screener = TermScreener::default();

    let flagged: Vec<String> = catalog
        .postings()
        .iter()
        .filter(|posting| !screener.is_passage_allowed(&posting.description))
        .map(|posting| posting.id.to_string())
        .collect();

    assert_eq!(flagged, vec!["job-003"]);
}

#[test]
fn guard_publishes_clean_draft() {
    let guard = PostingGuard::default();
    let posting = guard
        .review(PostingId::from("job-100"), retail_draft(), today())
        .expect("clean draft accepted");

    assert_eq!(posting.title, "Retail Sales Trainee");
    assert_eq!(posting.salary_figure(), 34_000);
}

#[test]
fn guard_rejects_years_requirement_in_title() {
    let mut draft = retail_draft();
    draft.title = "Sales Trainee 3+ years required".to_string();

    let rejection = PostingGuard::default()
        .review(PostingId::from("job-101"), draft, today())
        .expect_err("years requirement rejected");

    match rejection.violations.as_slice() {
        [PostingViolation::BannedTerm { field, matched }] => {
            assert_eq!(*field, PostingField::Title);
            assert_eq!(matched.banned_term, "years");
            assert_eq!(matched.distance, 0);
        }
        other => panic!("expected a title violation, got {other:?}"),
    }
}

#[test]
fn stricter_threshold_lets_near_misses_through() {
    let config = ScreeningConfig {
        banned_terms: vec!["Senior".to_string()],
        max_distance: 0,
    };
    let screener = TermScreener::from_config(&config);

    assert!(screener.is_term_allowed("Junior"));
    assert!(screener.is_term_allowed("seniour"));
    assert!(!screener.is_term_allowed("SENIOR"));
}
