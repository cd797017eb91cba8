use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContributorError>;

#[derive(Error, Debug)]
pub enum ContributorError {
    #[error("git command is not installed on this system")]
    GitNotInstalled,
    #[error("not inside a git project: {0}")]
    NotARepository(PathBuf),
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("can not get default branch name: {0}")]
    DefaultBranch(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("can not write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("git output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ContributorError {
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContributorError::Output {
            path: path.into(),
            source,
        }
    }
}
