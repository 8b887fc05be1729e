use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::screener::{TermMatch, TermScreener};
use crate::jobs::{JobPosting, PostingId};

/// Listing as typed into the job-posting form, before review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub deadline: String,
    pub remote: bool,
    pub skills: Vec<String>,
    pub benefits: Vec<String>,
    pub tags: Vec<String>,
}

/// Form fields that the guard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingField {
    Title,
    Company,
    Location,
    Description,
    Salary,
    Deadline,
    Skills,
    Benefits,
    Tags,
}

impl PostingField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Location => "location",
            Self::Description => "description",
            Self::Salary => "salary",
            Self::Deadline => "deadline",
            Self::Skills => "skills",
            Self::Benefits => "benefits",
            Self::Tags => "tags",
        }
    }
}

/// A single reason a draft cannot be published.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostingViolation {
    #[error("{} is required", .0.label())]
    MissingField(PostingField),
    #[error("{} mentions '{}', too close to banned term '{}'", .field.label(), .matched.token, .matched.banned_term)]
    BannedTerm {
        field: PostingField,
        matched: TermMatch,
    },
    #[error("deadline '{0}' is not a YYYY-MM-DD date")]
    InvalidDeadline(String),
    #[error("deadline {deadline} is before {today}")]
    DeadlinePassed { deadline: NaiveDate, today: NaiveDate },
    #[error("salary '{0}' does not contain a figure")]
    MissingSalaryFigure(String),
}

/// Every violation found while reviewing a draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} problem(s) found: {}", .violations.len(), summarize(.violations))]
pub struct PostingRejection {
    pub violations: Vec<PostingViolation>,
}

fn summarize(violations: &[PostingViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reviews drafts from the posting form against the screening policy.
#[derive(Debug, Clone, Default)]
pub struct PostingGuard {
    screener: TermScreener,
}

impl PostingGuard {
    pub fn new(screener: TermScreener) -> Self {
        Self { screener }
    }

    pub fn screener(&self) -> &TermScreener {
        &self.screener
    }

    /// Turn a draft into a publishable posting, or report everything wrong
    /// with it.
    pub fn review(
        &self,
        id: PostingId,
        draft: PostingDraft,
        today: NaiveDate,
    ) -> Result<JobPosting, PostingRejection> {
        let mut violations = Vec::new();

        let title = required(&draft.title, PostingField::Title, &mut violations);
        let company = required(&draft.company, PostingField::Company, &mut violations);
        let location = required(&draft.location, PostingField::Location, &mut violations);
        let description = required(
            &draft.description,
            PostingField::Description,
            &mut violations,
        );
        let salary = required(&draft.salary, PostingField::Salary, &mut violations);
        let deadline = required(&draft.deadline, PostingField::Deadline, &mut violations);

        self.screen(&title, PostingField::Title, &mut violations);
        self.screen(&description, PostingField::Description, &mut violations);

        let skills = clean_list(draft.skills);
        let benefits = clean_list(draft.benefits);
        let tags = clean_list(draft.tags);
        self.screen(&skills.join(" "), PostingField::Skills, &mut violations);
        self.screen(&benefits.join(" "), PostingField::Benefits, &mut violations);
        self.screen(&tags.join(" "), PostingField::Tags, &mut violations);

        if !salary.is_empty() && !salary.chars().any(|c| c.is_ascii_digit()) {
            violations.push(PostingViolation::MissingSalaryFigure(salary.clone()));
        }

        if !deadline.is_empty() {
            match NaiveDate::parse_from_str(&deadline, "%Y-%m-%d") {
                Ok(date) if date < today => violations.push(PostingViolation::DeadlinePassed {
                    deadline: date,
                    today,
                }),
                Ok(_) => {}
                Err(_) => violations.push(PostingViolation::InvalidDeadline(deadline.clone())),
            }
        }

        if !violations.is_empty() {
            return Err(PostingRejection { violations });
        }

        Ok(JobPosting {
            id,
            title,
            company,
            location,
            description,
            skills,
            benefits,
            salary,
            deadline,
            remote: draft.remote,
            tags,
        })
    }

    fn screen(&self, text: &str, field: PostingField, violations: &mut Vec<PostingViolation>) {
        if let Some(matched) = self.screener.passage_matches(text).into_iter().next() {
            violations.push(PostingViolation::BannedTerm { field, matched });
        }
    }
}

fn required(value: &str, field: PostingField, violations: &mut Vec<PostingViolation>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        violations.push(PostingViolation::MissingField(field));
    }
    trimmed.to_string()
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
