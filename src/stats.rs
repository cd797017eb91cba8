//! Summing `git log --numstat` output into per-author line totals.

use crate::error::{ContributorError, Result};
use crate::git::{AuthorFilter, HistorySource};
use crate::model::{Author, AuthorRecord, LineChange};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Marker git prints instead of a count for binary files.
const BINARY_PLACEHOLDER: &str = "-";

fn parse_count(field: &str) -> Result<u64> {
    if field == BINARY_PLACEHOLDER {
        return Ok(0);
    }
    field
        .parse()
        .map_err(|_| ContributorError::Parse(format!("can not convert '{field}' to a line count")))
}

/// Parse one numstat row. Rows that are not exactly three fields yield `None`.
pub fn parse_numstat_line(line: &str) -> Result<Option<LineChange>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [added, deleted, path] = fields.as_slice() else {
        return Ok(None);
    };
    Ok(Some(LineChange {
        added: parse_count(added)?,
        deleted: parse_count(deleted)?,
        path: (*path).to_string(),
    }))
}

/// Fold a whole numstat listing into `record`.
pub fn accumulate(record: &mut AuthorRecord, numstat: &str) -> Result<()> {
    for line in numstat.lines() {
        if let Some(change) = parse_numstat_line(line)? {
            record.add_change(&change);
        }
    }
    Ok(())
}

/// History filter for an identity. Falls back to the name when there is no
/// email, since an empty filter matches every commit.
pub fn author_filter(author: &Author) -> AuthorFilter<'_> {
    if author.email.is_empty() {
        AuthorFilter::Name(&author.name)
    } else {
        AuthorFilter::Email(&author.email)
    }
}

/// Query and total every author in order, one `git log` per author.
pub fn collect_records<S: HistorySource>(
    source: &S,
    authors: Vec<Author>,
    branch: &str,
    show_progress: bool,
) -> Result<Vec<AuthorRecord>> {
    let pb = if show_progress {
        let pb = ProgressBar::new(authors.len() as u64);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::with_capacity(authors.len());
    for author in authors {
        pb.set_message(format!("Scanning {}", author.name));
        let numstat = source.numstat(author_filter(&author), branch)?;
        let mut record = AuthorRecord::new(author);
        accumulate(&mut record, &numstat)?;
        tracing::trace!(
            name = %record.name,
            added = record.lines_added,
            deleted = record.lines_deleted,
            "author totals"
        );
        records.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(records)
}
