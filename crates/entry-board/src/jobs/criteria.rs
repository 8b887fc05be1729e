use serde::Serialize;

use super::domain::{LocationType, PostingId};
use super::salary::SalaryBand;

/// Filter state of the browse screen for one viewing session.
///
/// Created empty when the view mounts and changed one field at a time as the
/// user types or clicks; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub query: String,
    pub location: LocationType,
    pub salary_band: SalaryBand,
    skills: Vec<String>,
    expanded: Option<PostingId>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_location(&mut self, location: LocationType) {
        self.location = location;
    }

    pub fn set_salary_band(&mut self, band: SalaryBand) {
        self.salary_band = band;
    }

    /// Required skills in the order they were added.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Add a required skill. Blank skills and case-insensitive duplicates are
    /// ignored; returns whether the skill was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.has_skill(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let needle = skill.trim().to_lowercase();
        let before = self.skills.len();
        self.skills
            .retain(|existing| existing.to_lowercase() != needle);
        self.skills.len() != before
    }

    pub fn clear_skills(&mut self) {
        self.skills.clear();
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        let needle = skill.trim().to_lowercase();
        self.skills
            .iter()
            .any(|existing| existing.to_lowercase() == needle)
    }

    pub fn expanded(&self) -> Option<&PostingId> {
        self.expanded.as_ref()
    }

    /// Expand a card, collapsing any other; toggling the open card closes it.
    pub fn toggle_expanded(&mut self, id: &PostingId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &PostingId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// True when no filter narrows the catalog.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.location == LocationType::Any
            && self.salary_band.is_unbounded()
            && self.skills.is_empty()
    }
}
