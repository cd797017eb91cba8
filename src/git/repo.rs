use super::{AuthorFilter, HistorySource};
use crate::error::{ContributorError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

const HEAD_BRANCH_LABEL: &str = "HEAD branch:";

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Locate the top-level directory of the repository containing `path`, or
    /// the current dir if `None`.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let start = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        match Command::new("git").arg("--version").output() {
            Ok(out) if out.status.success() => {}
            _ => return Err(ContributorError::GitNotInstalled),
        }

        let output = Command::new("git")
            .current_dir(&start)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|_| ContributorError::NotARepository(start.clone()))?;
        if !output.status.success() {
            return Err(ContributorError::NotARepository(start));
        }

        let stdout = String::from_utf8(output.stdout)?;
        let top = stdout.lines().next().unwrap_or("").trim();
        if top.is_empty() {
            return Err(ContributorError::NotARepository(start));
        }
        tracing::debug!(root = top, "resolved repository root");

        Ok(Self {
            path: PathBuf::from(top),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(?args, "running git");
        let output = Command::new("git")
            .current_dir(&self.path)
            .args(args)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ContributorError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

impl HistorySource for GitRepo {
    fn author_log(&self) -> Result<String> {
        self.run(&["log", "--pretty=format:%an<%ae>"])
    }

    fn default_branch(&self) -> Result<String> {
        let output = self
            .run(&["remote", "show", "origin"])
            .map_err(|e| ContributorError::DefaultBranch(e.to_string()))?;
        parse_default_branch(&output)
    }

    fn numstat(&self, author: AuthorFilter<'_>, branch: &str) -> Result<String> {
        let [filter, matching] = author_args(author);
        self.run(&[
            "log",
            &filter,
            &matching,
            "--numstat",
            "--pretty=",
            "--no-merges",
            branch,
            "--",
        ])
    }
}

/// `--author` filter plus matching mode, anchored so one identity never
/// matches another whose name or email merely contains it.
///
/// git matches `--author` against the `Name <email>` ident line.
pub fn author_args(author: AuthorFilter<'_>) -> [String; 2] {
    match author {
        AuthorFilter::Email(email) => [
            format!("--author=<{email}>"),
            "--fixed-strings".to_string(),
        ],
        AuthorFilter::Name(name) => [
            format!("--author={}", name_regex(name)),
            "--extended-regexp".to_string(),
        ],
    }
}

fn name_regex(name: &str) -> String {
    // `%an<%ae>` with an email lacking `@` parses as a name ending in `<...>`.
    match name.rfind('<') {
        Some(at) if name.ends_with('>') => {
            let (n, e) = (&name[..at], &name[at + 1..name.len() - 1]);
            format!("^{} <{}>$", escape_ere(n), escape_ere(e))
        }
        _ => format!("^{} <", escape_ere(name)),
    }
}

/// Backslash-escape POSIX extended regex metacharacters.
fn escape_ere(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ".[]{}()\\*+?^$|".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Pull the branch name out of `git remote show <remote>` output.
pub fn parse_default_branch(remote_show: &str) -> Result<String> {
    remote_show
        .lines()
        .map(str::trim)
        .find_map(|line| {
            line.find(HEAD_BRANCH_LABEL)
                .map(|at| line[at + HEAD_BRANCH_LABEL.len()..].trim())
        })
        .filter(|branch| !branch.is_empty() && *branch != "(unknown)")
        .map(String::from)
        .ok_or_else(|| {
            ContributorError::DefaultBranch(format!("no `{HEAD_BRANCH_LABEL}` line from origin"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REMOTE_SHOW: &str = "* remote origin
  Fetch URL: git@github.com:example/project.git
  Push  URL: git@github.com:example/project.git
  HEAD branch: main
  Remote branches:
    main    tracked
    release tracked
";

    #[test]
    fn finds_head_branch() {
        assert_eq!(parse_default_branch(REMOTE_SHOW).unwrap(), "main");
    }

    #[test]
    fn keeps_branch_names_that_share_label_letters() {
        // "HEAD branch:" characters at the start of the name must survive.
        let out = "  HEAD branch: Branch-dev\n";
        assert_eq!(parse_default_branch(out).unwrap(), "Branch-dev");
    }

    #[test]
    fn email_filter_is_bracketed_fixed_string() {
        assert_eq!(
            author_args(AuthorFilter::Email("bob@x.com")),
            ["--author=<bob@x.com>".to_string(), "--fixed-strings".to_string()]
        );
    }

    #[test]
    fn name_filter_is_anchored_and_escaped() {
        assert_eq!(
            author_args(AuthorFilter::Name("build.bot (ci)")),
            [
                r"--author=^build\.bot \(ci\) <".to_string(),
                "--extended-regexp".to_string()
            ]
        );
    }

    #[test]
    fn name_with_bracketed_non_email_matches_whole_ident() {
        assert_eq!(
            author_args(AuthorFilter::Name("bot<local>"))[0],
            "--author=^bot <local>$"
        );
    }

    #[test]
    fn missing_label_is_an_error() {
        let err = parse_default_branch("* remote origin\n  Fetch URL: x\n").unwrap_err();
        assert!(matches!(err, ContributorError::DefaultBranch(_)));
    }

    #[test]
    fn unknown_head_is_an_error() {
        let err = parse_default_branch("  HEAD branch: (unknown)\n").unwrap_err();
        assert!(matches!(err, ContributorError::DefaultBranch(_)));
    }
}
