//! Splitting raw `Name<email>` author strings.

use crate::model::Author;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn email_token() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"<[^<]*@.*>$").expect("email pattern is valid"))
}

/// Split a raw author string into name and email.
///
/// The email is the trailing `<...@...>` token without its angle brackets and
/// the name is everything in front of it. Input without such a token comes back
/// whole as the name with an empty email.
pub fn parse_author(raw: &str) -> Author {
    match email_token().find(raw) {
        Some(token) => {
            let bracketed = token.as_str();
            Author {
                name: raw[..token.start()].to_string(),
                email: bracketed[1..bracketed.len() - 1].to_string(),
            }
        }
        None => Author {
            name: raw.to_string(),
            email: String::new(),
        },
    }
}

/// Raw author strings from `git log` output, blank lines dropped and exact
/// repeats collapsed. First occurrence keeps its position.
pub fn unique_raw_authors(log_output: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    log_output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .filter(|line| seen.insert(*line))
        .map(String::from)
        .collect()
}
