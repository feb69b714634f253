use once_cell::sync::Lazy;
use regex::Regex;

pub static OUTPUT_EXTENSION: &str = "txt";

// Turns a book title into a file name stem usable on any file system.
//
// Distinct titles may map to the same stem; callers get no uniqueness
// guarantee.
pub fn sanitize_file_name(name: &str) -> String {
    // Kindle keeps inline markup from some publishers in titles
    static REGEX_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<i>|</i>|<b>|</b>").unwrap());
    static REGEX_SPECIAL_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
    static REGEX_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());
    static REGEX_HYPHEN_OR_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

    let name = REGEX_MARKUP.replace_all(name, "");

    let name = REGEX_SPECIAL_CHAR.replace_all(&name, "");
    let name = REGEX_SPACES.replace_all(name.trim(), "_");

    REGEX_HYPHEN_OR_SPACE.replace_all(&name, "-").into_owned()
}

pub fn output_file_name(title: &str) -> String {
    format!("{}.{}", sanitize_file_name(title), OUTPUT_EXTENSION)
}
