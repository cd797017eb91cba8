use crate::model::{AuthorRecord, Identity};
use std::collections::HashSet;

/// Drop every entry whose name or email was already taken by an earlier one.
///
/// Empty names and emails never count as a match.
pub fn dedup_identities<T: Identity>(items: Vec<T>) -> Vec<T> {
    let mut names: HashSet<String> = HashSet::new();
    let mut emails: HashSet<String> = HashSet::new();

    items
        .into_iter()
        .filter(|item| {
            let name = item.name();
            let email = item.email();
            if (!name.is_empty() && names.contains(name))
                || (!email.is_empty() && emails.contains(email))
            {
                return false;
            }
            names.insert(name.to_string());
            emails.insert(email.to_string());
            true
        })
        .collect()
}

/// Deduplicate, then order by lines added, most first. Equal counts keep their
/// input order.
pub fn rank(records: Vec<AuthorRecord>) -> Vec<AuthorRecord> {
    let mut ranked = dedup_identities(records);
    ranked.sort_by(|a, b| b.lines_added.cmp(&a.lines_added));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;
    use pretty_assertions::assert_eq;

    fn rec(name: &str, email: &str, added: u64) -> AuthorRecord {
        AuthorRecord {
            name: name.into(),
            email: email.into(),
            lines_added: added,
            lines_deleted: 0,
        }
    }

    #[test]
    fn sorts_descending_by_lines_added() {
        let ranked = rank(vec![
            rec("a", "a@x", 10),
            rec("b", "b@x", 30),
            rec("c", "c@x", 20),
        ]);
        let added: Vec<u64> = ranked.iter().map(|r| r.lines_added).collect();
        assert_eq!(added, vec![30, 20, 10]);
        assert_eq!(ranked[0].name, "b");
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![rec("a", "a@x", 5), rec("b", "b@x", 5), rec("c", "c@x", 9)]);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn same_email_different_case_name_is_one_row() {
        let ranked = rank(vec![
            rec("alice", "alice@x.com", 4),
            rec("Alice", "alice@x.com", 4),
        ]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "alice");
    }

    #[test]
    fn same_name_different_email_is_one_row() {
        let ranked = rank(vec![rec("Bob", "bob@home", 1), rec("Bob", "bob@work", 50)]);
        assert_eq!(ranked, vec![rec("Bob", "bob@home", 1)]);
    }

    #[test]
    fn first_seen_wins_before_sorting() {
        let ranked = rank(vec![
            rec("Carol", "carol@x", 1),
            rec("Dave", "dave@x", 2),
            rec("carol", "carol@x", 100),
        ]);
        assert_eq!(ranked, vec![rec("Dave", "dave@x", 2), rec("Carol", "carol@x", 1)]);
    }

    #[test]
    fn empty_emails_do_not_collide() {
        let out = dedup_identities(vec![
            Author {
                name: "buildbot".into(),
                email: String::new(),
            },
            Author {
                name: "release-bot".into(),
                email: String::new(),
            },
        ]);
        assert_eq!(out.len(), 2);
    }
}
