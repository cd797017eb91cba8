use crate::author::{parse_author, unique_raw_authors};
use crate::error::{ContributorError, Result};
use crate::git::{GitRepo, HistorySource};
use crate::model::{AuthorRecord, ContributorsOutput, SCHEMA_VERSION};
use crate::rank::{dedup_identities, rank};
use crate::render::{render_table, TableStyle};
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE: &str = "Contributors.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Markdown,
    Json,
}

/// Everything the report needs from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub format: OutputFormat,
    pub write_to_file: bool,
    pub repo: Option<PathBuf>,
    pub branch: Option<String>,
    pub show_progress: bool,
}

/// Ranked authors and the branch they were counted on.
#[derive(Debug, Clone)]
pub struct Report {
    pub branch: String,
    pub authors: Vec<AuthorRecord>,
}

/// Enumerate, deduplicate, total and rank the authors of `source`.
///
/// Identities are deduplicated before any per-author query runs, so each
/// distinct author costs exactly one `git log`.
pub fn build_report<S: HistorySource>(
    source: &S,
    branch: Option<&str>,
    show_progress: bool,
) -> Result<Report> {
    let raw = source.author_log()?;
    let authors = dedup_identities(
        unique_raw_authors(&raw)
            .iter()
            .map(|a| parse_author(a))
            .collect(),
    );
    tracing::debug!(count = authors.len(), "distinct authors");

    let branch = match branch {
        Some(b) => b.to_string(),
        None => source.default_branch()?,
    };
    tracing::debug!(%branch, "scanning branch");

    let records = crate::stats::collect_records(source, authors, &branch, show_progress)?;
    Ok(Report {
        branch,
        authors: rank(records),
    })
}

pub fn exec(options: Options) -> anyhow::Result<()> {
    let repo = GitRepo::open(options.repo.as_ref())
        .context("can not locate the git project; are you inside one?")?;

    let report = build_report(&repo, options.branch.as_deref(), options.show_progress)
        .context("can not get authors information")?;

    if options.write_to_file {
        let path = repo.path().join(OUTPUT_FILE);
        write_file(&path, &report.authors)?;
        println!("{} {}", style("Generated").green().bold(), path.display());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options.format {
        OutputFormat::Plain => render_table(&mut out, &report.authors, TableStyle::Plain)?,
        OutputFormat::Markdown => render_table(&mut out, &report.authors, TableStyle::Markdown)?,
        OutputFormat::Json => output_json(&mut out, &report, repo.path())?,
    }
    Ok(())
}

fn write_file(path: &Path, authors: &[AuthorRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| ContributorError::output(path, e))?;
    let mut w = BufWriter::new(file);
    render_table(&mut w, authors, TableStyle::Markdown)
        .and_then(|_| w.flush())
        .map_err(|e| ContributorError::output(path, e))
}

fn output_json<W: Write>(out: &mut W, report: &Report, repo_path: &Path) -> Result<()> {
    let output = ContributorsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo_path.to_string_lossy().to_string(),
        branch: report.branch.clone(),
        authors: report.authors.clone(),
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
