// Second line of a clipping, e.g.
//
//   - Your Highlight on page 42 | Location 567-570 | Added on Monday, March 3, 2024
//
// Every field is extracted on its own; a missing one never affects the others.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::EntryKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: Option<EntryKind>,
    pub page: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

impl EntryMetadata {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        EntryMetadata {
            kind: extract_kind(line),
            page: extract_page(line),
            location: extract_location(line),
            date: extract_date(line),
        }
    }
}

pub fn extract_kind(line: &str) -> Option<EntryKind> {
    static REGEX_KIND: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^- Your (?P<kind>Note|Highlight|Bookmark)\b").unwrap());

    let caps = REGEX_KIND.captures(line)?;
    EntryKind::of(caps.name("kind")?.as_str())
}

// Only the first number of a page range.
pub fn extract_page(line: &str) -> Option<String> {
    static REGEX_PAGE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^.*page (?P<page>[0-9]+)(-[0-9]+)?").unwrap());

    capture(&REGEX_PAGE, line, "page")
}

pub fn extract_location(line: &str) -> Option<String> {
    static REGEX_LOCATION: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^.*Location (?P<location>[0-9]+(?:-[0-9]+)?)").unwrap());

    capture(&REGEX_LOCATION, line, "location")
}

pub fn extract_date(line: &str) -> Option<String> {
    static REGEX_DATE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^.*Added on (?P<date>.+)$").unwrap());

    capture(&REGEX_DATE, line, "date")
}

fn capture(regex: &Regex, line: &str, name: &str) -> Option<String> {
    regex
        .captures(line)
        .and_then(|caps| caps.name(name))
        .map(|m| m.as_str().to_owned())
}
