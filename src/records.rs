//! Core data types for harvested job listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default value for listing fields that could not be extracted
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Default value for a listing whose description could not be extracted
pub const NO_DESCRIPTION: &str = "No description";

/// Opaque token identifying one listing on the upstream job site
///
/// Identifiers are unique within the accumulated set of a single discovery
/// run; discovery order carries no meaning beyond deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One fully resolved job listing
///
/// Fields that fail extraction individually fall back to their sentinel
/// defaults; a record is valid as long as its id resolved. The `keyword`
/// field names the search keyword that surfaced this listing and is filled
/// in by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub link: String,
    pub scraped_at: DateTime<Utc>,
    pub keyword: String,
}
