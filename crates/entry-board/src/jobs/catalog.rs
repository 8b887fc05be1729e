use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use super::domain::{JobPosting, PostingId};

/// Errors raised while loading a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed CSV catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("posting id '{0}' appears more than once")]
    DuplicateId(PostingId),
    #[error("unsupported catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Immutable, fully loaded set of postings with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    postings: Vec<JobPosting>,
}

impl Catalog {
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(postings.len());
        for posting in &postings {
            if !seen.insert(&posting.id) {
                return Err(CatalogError::DuplicateId(posting.id.clone()));
            }
        }
        Ok(Self { postings })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let postings: Vec<JobPosting> = serde_json::from_reader(reader)?;
        Self::new(postings)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut postings = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            postings.push(row?.into_posting());
        }
        Self::new(postings)
    }

    /// Load a catalog export, picking the reader from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let reader = || -> Result<BufReader<File>, CatalogError> {
            Ok(BufReader::new(File::open(path)?))
        };

        let catalog = match extension.as_str() {
            "json" => Self::from_json_reader(reader()?)?,
            "csv" => Self::from_csv_reader(reader()?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        info!(
            path = %path.display(),
            postings = catalog.len(),
            "loaded job catalog"
        );
        Ok(catalog)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn get(&self, id: &PostingId) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| &posting.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    title: String,
    company: String,
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "semicolon_list")]
    skills: Vec<String>,
    #[serde(default, deserialize_with = "semicolon_list")]
    benefits: Vec<String>,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    deadline: String,
    #[serde(default, deserialize_with = "remote_flag")]
    remote: bool,
    #[serde(default, deserialize_with = "semicolon_list")]
    tags: Vec<String>,
}

impl CatalogRow {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            id: PostingId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description,
            skills: self.skills,
            benefits: self.benefits,
            salary: self.salary,
            deadline: self.deadline,
            remote: self.remote,
            tags: self.tags,
        }
    }
}

fn semicolon_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(';')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect())
}

fn remote_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1" | "remote"
    ))
}
