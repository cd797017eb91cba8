pub mod repo;

pub use repo::{parse_default_branch, GitRepo};

use crate::error::Result;

/// Which commits a numstat query is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorFilter<'a> {
    /// Commits whose author email is exactly this address.
    Email(&'a str),
    /// Commits whose author name is exactly this string.
    Name(&'a str),
}

impl AuthorFilter<'_> {
    pub fn value(&self) -> &str {
        match self {
            AuthorFilter::Email(v) | AuthorFilter::Name(v) => *v,
        }
    }
}

/// Read-only view of a repository's history, as text from the `git` CLI.
pub trait HistorySource {
    /// Raw `Name<email>` author strings over the full history, most recent first.
    fn author_log(&self) -> Result<String>;

    /// Name of the branch the `origin` remote designates as its HEAD.
    fn default_branch(&self) -> Result<String>;

    /// `git log --numstat` rows for non-merge commits on `branch` by `author`.
    fn numstat(&self, author: AuthorFilter<'_>, branch: &str) -> Result<String>;
}
