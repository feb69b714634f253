use crate::{
    clippings::model::{AnnotationEntry, Book},
    utility::date::CreationDate,
};

pub static CONTENT_TYPE: &str = "text/x-zim-wiki";
pub static WIKI_FORMAT: &str = "zim 0.6";

// One Zim page per book
pub fn render_book(book: &Book, created: &CreationDate) -> String {
    let mut page = render_header(book, created);
    for entry in &book.entries {
        page.push_str(&render_entry(entry));
    }

    page
}

fn render_header(book: &Book, created: &CreationDate) -> String {
    let mut header = format!(
        "Content-Type: {}\nWiki-Format: {}\nCreation-Date: {}\n\n",
        CONTENT_TYPE,
        WIKI_FORMAT,
        created.iso8601()
    );

    header.push_str(&format!("====== {} ======\n", book.title));
    header.push_str(&format!("Created {}\n\n", created.long_date()));

    if let Some(author) = &book.author {
        header.push_str(&format!("Author: {}\n\n", author));
    }

    header
}

// **Entry:** Highlight / Page 42 / Location 567-570 / Monday, March 3, 2024
// **Text:** ...
//
// The date fragment is always written, even when empty. Entries without text
// are not followed by a blank line.
fn render_entry(entry: &AnnotationEntry) -> String {
    let mut s = String::from("**Entry:** ");
    if let Some(kind) = &entry.kind {
        s.push_str(kind.as_str());
    }
    if let Some(page) = &entry.page {
        s.push_str(&format!(" / Page {}", page));
    }
    if let Some(location) = &entry.location {
        s.push_str(&format!(" / Location {}", location));
    }
    s.push_str(&format!(" / {}\n", entry.date.as_deref().unwrap_or_default()));

    if let Some(text) = &entry.text {
        s.push_str(&format!("**Text:** {}\n\n", text));
    }

    s
}
