use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Name and email of a commit author, split out of a raw `Name<email>` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Per-author line totals over the scanned branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub email: String,
    pub lines_added: u64,
    pub lines_deleted: u64,
}

impl AuthorRecord {
    pub fn new(author: Author) -> Self {
        Self {
            name: author.name,
            email: author.email,
            lines_added: 0,
            lines_deleted: 0,
        }
    }

    pub fn add_change(&mut self, change: &LineChange) {
        self.lines_added += change.added;
        self.lines_deleted += change.deleted;
    }
}

/// One `added deleted path` row of `git log --numstat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub added: u64,
    pub deleted: u64,
    pub path: String,
}

/// Anything carrying an author identity, used for name/email deduplication.
pub trait Identity {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
}

impl Identity for Author {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }
}

impl Identity for AuthorRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub branch: String,
    pub authors: Vec<AuthorRecord>,
}
