use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::salary::parse_salary_figure;

/// Opaque identifier of a posting, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(pub String);

impl From<&str> for PostingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PostingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A job listing as supplied by the backend. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: PostingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Free text such as "$45,000 - $55,000".
    #[serde(default)]
    pub salary: String,
    /// Application deadline, `YYYY-MM-DD` when well formed.
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JobPosting {
    pub fn salary_figure(&self) -> u64 {
        parse_salary_figure(&self.salary)
    }

    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d").ok()
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.skills
            .iter()
            .any(|candidate| candidate.to_lowercase() == skill)
    }
}

/// Location-type selector on the browse screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    #[default]
    Any,
    Remote,
    Onsite,
}

impl LocationType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Any, Self::Remote, Self::Onsite]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Remote => "Remote",
            Self::Onsite => "On-site",
        }
    }

    pub fn admits(self, remote: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Remote => remote,
            Self::Onsite => !remote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location type '{0}' (expected any, remote, or onsite)")]
pub struct UnknownLocationType(pub String);

impl FromStr for LocationType {
    type Err = UnknownLocationType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "all" => Ok(Self::Any),
            "remote" => Ok(Self::Remote),
            "onsite" | "on-site" | "on_site" | "in-person" => Ok(Self::Onsite),
            _ => Err(UnknownLocationType(value.to_string())),
        }
    }
}
