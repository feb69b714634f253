use once_cell::sync::Lazy;
use regex::Regex;

use super::model::BookIdentity;

// "<title>" optionally followed by " (<last>, <first>)"
//
// The pattern accepts nearly any non-empty line, so in practice only an empty
// header yields None.
pub fn parse_header(line: &str) -> Option<BookIdentity> {
    static REGEX_HEADER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<title>.+?)(\s\((?P<last_name>.+),\s(?P<first_name>.+)\))?$").unwrap()
    });

    let caps = REGEX_HEADER.captures(line.trim())?;

    let title = caps.name("title")?.as_str().trim().to_owned();
    if title.is_empty() {
        return None;
    }

    let author = match (caps.name("last_name"), caps.name("first_name")) {
        (Some(last_name), Some(first_name)) => {
            Some(format!("{} {}", first_name.as_str(), last_name.as_str()))
        }
        _ => None,
    };

    Some(BookIdentity { title, author })
}
