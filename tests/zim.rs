use std::fs;

use anyhow::Result;
use chrono::DateTime;
use indicatif::ProgressBar;

use kindle_to_zim::{
    clippings::{
        model::{AnnotationEntry, Book, EntryKind},
        parser::parse_clippings,
    },
    utility::date::CreationDate,
    zim::{
        renderer::render_book,
        writer::{ExportSummary, ZimWriter, CATALOG_JSON_FILE_NAME},
    },
};

fn created() -> CreationDate {
    CreationDate::from(DateTime::parse_from_rfc3339("2024-03-03T14:05:09.250+01:00").unwrap())
}

fn entry(kind: Option<EntryKind>, page: Option<&str>, text: Option<&str>) -> AnnotationEntry {
    AnnotationEntry {
        kind,
        page: page.map(str::to_owned),
        location: Some("567-570".to_owned()),
        date: Some("Monday, March 3, 2024".to_owned()),
        text: text.map(str::to_owned),
    }
}

static DUNE_AND_1984: &str = "\
Dune (Herbert, Frank)
- Your Highlight on page 12 | Location 180-182 | Added on Monday, March 4, 2024

I must not fear.
==========
1984 (Orwell, George)
- Your Highlight on page 3 | Location 40 | Added on Monday, March 4, 2024

It was a bright cold day in April.
==========
Dune (Herbert, Frank)
- Your Bookmark on page 20 | Location 300 | Added on Tuesday, March 5, 2024

==========
";

#[test]
fn test_creation_date() {
    let created = created();
    assert_eq!(created.iso8601(), "2024-03-03T14:05:09+01:00");
    assert_eq!(created.long_date(), "Sunday 03 March 2024");
}

#[test]
fn test_render_book() {
    let book = Book {
        title: "Meditations".to_owned(),
        author: Some("Marcus Aurelius".to_owned()),
        entries: vec![
            entry(Some(EntryKind::Highlight), Some("42"), Some("Waste no more time.")),
            entry(Some(EntryKind::Bookmark), Some("50"), None),
        ],
    };

    assert_eq!(
        render_book(&book, &created()),
        "\
Content-Type: text/x-zim-wiki
Wiki-Format: zim 0.6
Creation-Date: 2024-03-03T14:05:09+01:00

====== Meditations ======
Created Sunday 03 March 2024

Author: Marcus Aurelius

**Entry:** Highlight / Page 42 / Location 567-570 / Monday, March 3, 2024
**Text:** Waste no more time.

**Entry:** Bookmark / Page 50 / Location 567-570 / Monday, March 3, 2024
"
    );
}

#[test]
fn test_render_book_with_missing_fields() {
    let book = Book {
        title: "The Odyssey".to_owned(),
        author: None,
        entries: vec![AnnotationEntry {
            kind: None,
            page: None,
            location: None,
            date: None,
            text: Some("Sing to me of the man, Muse.".to_owned()),
        }],
    };

    let page = render_book(&book, &created());

    assert!(!page.contains("Author:"));
    assert!(page.ends_with(
        "====== The Odyssey ======\nCreated Sunday 03 March 2024\n\n\
         **Entry:**  / \n**Text:** Sing to me of the man, Muse.\n\n"
    ));
}

#[test]
fn test_export_catalog() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = ZimWriter::init(dir.path())?;

    let catalog = parse_clippings(DUNE_AND_1984);
    let summary = out.export_catalog(&catalog, &created(), ProgressBar::hidden());

    assert_eq!(
        summary,
        ExportSummary {
            books: 2,
            entries: 3,
            failed: 0,
        }
    );
    assert_eq!(summary.to_string(), "2 books, 3 entries");

    let dune = fs::read_to_string(dir.path().join("Dune.txt"))?;
    assert_eq!(dune.matches("**Entry:**").count(), 2);
    assert!(dune.contains("Author: Frank Herbert\n"));

    let nineteen_eighty_four = fs::read_to_string(dir.path().join("1984.txt"))?;
    assert_eq!(nineteen_eighty_four.matches("**Entry:**").count(), 1);

    Ok(())
}

#[test]
fn test_export_catalog_skips_failed_book() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = ZimWriter::init(dir.path())?;

    // a directory where the page for "Dune" should go
    fs::create_dir(dir.path().join("Dune.txt"))?;

    let catalog = parse_clippings(DUNE_AND_1984);
    let summary = out.export_catalog(&catalog, &created(), ProgressBar::hidden());

    assert_eq!(
        summary,
        ExportSummary {
            books: 1,
            entries: 1,
            failed: 1,
        }
    );
    assert!(dir.path().join("1984.txt").is_file());

    Ok(())
}

#[test]
fn test_save_catalog_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = ZimWriter::init(&dir.path().join("nested/out"))?;

    let catalog = parse_clippings(DUNE_AND_1984);
    let path = out.save_catalog_json(&catalog)?;
    assert_eq!(path, out.root().join(CATALOG_JSON_FILE_NAME));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let books = json["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["author"], "Frank Herbert");
    assert_eq!(books[0]["entries"][1]["kind"], "bookmark");
    assert_eq!(books[0]["entries"][1]["text"], serde_json::Value::Null);

    Ok(())
}
