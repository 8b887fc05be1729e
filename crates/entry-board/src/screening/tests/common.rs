use chrono::NaiveDate;

use crate::config::ScreeningConfig;
use crate::screening::{BannedTermSet, PostingDraft, PostingGuard, TermScreener};

pub(super) fn experience_only() -> BannedTermSet {
    BannedTermSet::new(["experience"])
}

pub(super) fn screener() -> TermScreener {
    TermScreener::from_config(&ScreeningConfig::default())
}

pub(super) fn guard() -> PostingGuard {
    PostingGuard::new(screener())
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

pub(super) fn draft() -> PostingDraft {
    PostingDraft {
        title: "  Customer Support Associate ".to_string(),
        company: "Brightline Services".to_string(),
        location: "Des Moines, IA".to_string(),
        description: "Help our customers with daily questions. Training provided for recent graduates."
            .to_string(),
        salary: "$38,000 - $42,000".to_string(),
        deadline: "2025-10-15".to_string(),
        remote: false,
        skills: vec!["Communication".to_string(), " ".to_string(), "Teamwork".to_string()],
        benefits: vec!["Health insurance".to_string(), "Paid time off".to_string()],
        tags: vec!["entry level".to_string()],
    }
}
