use kindle_to_zim::utility::str::{output_file_name, sanitize_file_name};

static TITLES: &[&str] = &[
    "Dune",
    "The Odyssey",
    "  Meditations  ",
    "<i>Hamlet</i>: Prince of Denmark",
    "Zen and the Art of Motorcycle Maintenance: An Inquiry into Values",
    "Gödel, Escher, Bach -- an Eternal Golden Braid",
    "Tom Sawyer -  The Adventures",
    "What/If? \"Serious\" Answers",
    "tabs\tand\nnewlines",
    "<b>",
    "",
    "1984",
];

#[test]
fn test_sanitize_examples() {
    assert_eq!(sanitize_file_name("The Odyssey"), "The_Odyssey");
    assert_eq!(sanitize_file_name("1984"), "1984");
    assert_eq!(
        sanitize_file_name("<i>Hamlet</i>: Prince of Denmark"),
        "Hamlet_Prince_of_Denmark"
    );
    assert_eq!(
        sanitize_file_name("What/If? \"Serious\" Answers"),
        "WhatIf_Serious_Answers"
    );
    assert_eq!(sanitize_file_name("  Meditations  "), "Meditations");
    assert_eq!(sanitize_file_name("tabs\tand\nnewlines"), "tabs-and-newlines");
}

#[test]
fn test_sanitize_collapses_runs() {
    assert_eq!(sanitize_file_name("Two  Spaces"), "Two_Spaces");
    assert_eq!(
        sanitize_file_name("Gödel, Escher, Bach -- an Eternal Golden Braid"),
        "Gödel_Escher_Bach_-_an_Eternal_Golden_Braid"
    );
}

#[test]
fn test_sanitize_is_idempotent() {
    for title in TITLES {
        let once = sanitize_file_name(title);
        assert_eq!(sanitize_file_name(&once), once, "{:?}", title);
    }
}

#[test]
fn test_sanitize_output_is_clean() {
    for title in TITLES {
        let name = sanitize_file_name(title);
        assert_eq!(name.trim(), name, "{:?}", title);
        assert!(!name.contains(char::is_whitespace), "{:?}", title);
        for tag in ["<i>", "</i>", "<b>", "</b>", "<", ">"] {
            assert!(!name.contains(tag), "{:?}", title);
        }
    }
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("The Odyssey"), "The_Odyssey.txt");
}
