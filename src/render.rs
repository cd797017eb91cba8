//! Text tables for the ranked author list.

use crate::model::AuthorRecord;
use console::{measure_text_width, pad_str, Alignment};
use std::borrow::Cow;
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["NAME", "EMAIL", "+(APPEND)", "-(DELETE)"];
const ALIGN: [Alignment; 4] = [
    Alignment::Left,
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// `+---+` borders around the header and the body.
    Plain,
    /// GitHub-flavoured Markdown: side borders and a `|---|` header rule only.
    Markdown,
}

fn escape_cell(cell: &str, style: TableStyle) -> Cow<'_, str> {
    match style {
        TableStyle::Markdown if cell.contains('|') => Cow::Owned(cell.replace('|', "\\|")),
        _ => Cow::Borrowed(cell),
    }
}

fn rule(widths: &[usize], joint: char) -> String {
    let mut line = String::new();
    line.push(joint);
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push(joint);
    }
    line
}

fn row(cells: &[Cow<'_, str>], widths: &[usize], align: &[Alignment]) -> String {
    let mut line = String::from("|");
    for ((cell, w), a) in cells.iter().zip(widths).zip(align) {
        line.push(' ');
        line.push_str(&pad_str(cell, *w, *a, None));
        line.push_str(" |");
    }
    line
}

/// Write `records` as a table, one row per author in the given order.
pub fn render_table<W: Write>(
    out: &mut W,
    records: &[AuthorRecord],
    style: TableStyle,
) -> io::Result<()> {
    let body: Vec<[Cow<'_, str>; 4]> = records
        .iter()
        .map(|r| {
            [
                escape_cell(&r.name, style),
                escape_cell(&r.email, style),
                Cow::Owned(r.lines_added.to_string()),
                Cow::Owned(r.lines_deleted.to_string()),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| measure_text_width(h)).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(measure_text_width(cell));
        }
    }

    let header: Vec<Cow<'_, str>> = HEADERS.iter().map(|h| Cow::Borrowed(*h)).collect();
    let centered = [Alignment::Center; 4];

    match style {
        TableStyle::Plain => {
            let border = rule(&widths, '+');
            writeln!(out, "{border}")?;
            writeln!(out, "{}", row(&header, &widths, &centered))?;
            writeln!(out, "{border}")?;
            for cells in &body {
                writeln!(out, "{}", row(cells, &widths, &ALIGN))?;
            }
            writeln!(out, "{border}")?;
        }
        TableStyle::Markdown => {
            writeln!(out, "{}", row(&header, &widths, &centered))?;
            writeln!(out, "{}", rule(&widths, '|'))?;
            for cells in &body {
                writeln!(out, "{}", row(cells, &widths, &ALIGN))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<AuthorRecord> {
        vec![
            AuthorRecord {
                name: "Bob".into(),
                email: "bob@x.com".into(),
                lines_added: 120,
                lines_deleted: 7,
            },
            AuthorRecord {
                name: "Alice".into(),
                email: "alice@example.org".into(),
                lines_added: 9,
                lines_deleted: 30,
            },
        ]
    }

    fn render(style: TableStyle) -> String {
        let mut buf = Vec::new();
        render_table(&mut buf, &records(), style).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_table_layout() {
        let expected = "\
+-------+-------------------+-----------+-----------+
| NAME  |       EMAIL       | +(APPEND) | -(DELETE) |
+-------+-------------------+-----------+-----------+
| Bob   | bob@x.com         |       120 |         7 |
| Alice | alice@example.org |         9 |        30 |
+-------+-------------------+-----------+-----------+
";
        assert_eq!(render(TableStyle::Plain), expected);
    }

    #[test]
    fn markdown_table_layout() {
        let expected = "\
| NAME  |       EMAIL       | +(APPEND) | -(DELETE) |
|-------|-------------------|-----------|-----------|
| Bob   | bob@x.com         |       120 |         7 |
| Alice | alice@example.org |         9 |        30 |
";
        assert_eq!(render(TableStyle::Markdown), expected);
    }

    #[test]
    fn styles_share_rows_and_order() {
        let rows = |s: &str| -> Vec<String> {
            s.lines()
                .filter(|l| !l.starts_with('+') && !l.starts_with("|-"))
                .map(String::from)
                .collect()
        };
        assert_eq!(rows(&render(TableStyle::Plain)), rows(&render(TableStyle::Markdown)));
    }

    #[test]
    fn empty_list_renders_header_only() {
        let mut buf = Vec::new();
        render_table(&mut buf, &[], TableStyle::Markdown).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 2);
    }

    #[test]
    fn markdown_escapes_pipes() {
        let mut buf = Vec::new();
        let recs = vec![AuthorRecord {
            name: "a|b".into(),
            email: "ab@x".into(),
            lines_added: 1,
            lines_deleted: 0,
        }];
        render_table(&mut buf, &recs, TableStyle::Markdown).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("a\\|b"));
    }
}
