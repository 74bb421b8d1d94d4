//! Project identifiers
//!
//! ID Format: `p-{7-char-hash}` (e.g., `p-7f2b4c1`)
//!
//! Hash is derived from title + creation timestamp + a process-wide sequence
//! number. Uniqueness is probabilistic: two IDs can collide, but only with
//! the odds of a 28-bit hash collision.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid project ID format: expected 'p-{{7-char-hash}}', got '{0}'")]
    InvalidProjectId(String),
}

/// Generates a 7-character hash from title, timestamp and sequence
fn generate_hash(title: &str, timestamp: DateTime<Utc>, sequence: u64) -> String {
    let input = format!(
        "{}{}{}",
        title,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        sequence
    );
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Project ID in the format `p-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId {
    hash: String,
}

impl ProjectId {
    /// Creates a new project ID from title and timestamp
    ///
    /// Every call draws a fresh sequence number, so the same title at the
    /// same instant still yields different IDs.
    pub fn new(title: &str, timestamp: DateTime<Utc>) -> Self {
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self {
            hash: generate_hash(title, timestamp, sequence),
        }
    }

    /// Creates a new project ID stamped with the current time
    pub fn generate(title: &str) -> Self {
        Self::new(title, Utc::now())
    }

    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("p-{}", self.hash))
    }
}

impl FromStr for ProjectId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hash = s
            .strip_prefix("p-")
            .ok_or_else(|| IdError::InvalidProjectId(s.to_string()))?;

        if hash.len() != 7 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidProjectId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_ascii_lowercase(),
        })
    }
}

impl TryFrom<String> for ProjectId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_format() {
        let id = ProjectId::new("Build API", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("p-"));
        assert_eq!(s.len(), 9);
        assert!(s[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn project_id_parse() {
        let id: ProjectId = "p-7f2b4c1".parse().unwrap();
        assert_eq!(id.hash(), "7f2b4c1");
        assert_eq!(id.to_string(), "p-7f2b4c1");
    }

    #[test]
    fn project_id_parse_trims_whitespace() {
        let id: ProjectId = "  p-abcdef0 ".parse().unwrap();
        assert_eq!(id.to_string(), "p-abcdef0");
    }

    #[test]
    fn project_id_parse_invalid() {
        assert!("x-7f2b4c1".parse::<ProjectId>().is_err());
        assert!("p-123".parse::<ProjectId>().is_err());
        assert!("p-zzzzzzz".parse::<ProjectId>().is_err());
        assert!("p-7f2b4c1a".parse::<ProjectId>().is_err());
        assert!("".parse::<ProjectId>().is_err());
    }

    #[test]
    fn same_title_same_instant_differs() {
        let now = Utc::now();
        let a = ProjectId::new("Same", now);
        let b = ProjectId::new("Same", now);

        assert_ne!(a, b);
    }

    #[test]
    fn serde_as_string() {
        let id: ProjectId = "p-0000abc".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-0000abc\"");

        let parsed: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_rejects_malformed() {
        let result: Result<ProjectId, _> = serde_json::from_str("\"t-0000abc\"");
        assert!(result.is_err());
    }
}
