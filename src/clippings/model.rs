use std::{collections::HashMap, fmt};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Note,
    Highlight,
    Bookmark,
}

impl EntryKind {
    pub fn of(name: &str) -> Option<Self> {
        match name {
            "Note" => Some(Self::Note),
            "Highlight" => Some(Self::Highlight),
            "Bookmark" => Some(Self::Bookmark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Highlight => "Highlight",
            Self::Bookmark => "Bookmark",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// First line of a clipping: "<title> (<last>, <first>)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdentity {
    pub title: String,
    pub author: Option<String>,
}

// One clipping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationEntry {
    pub kind: Option<EntryKind>,
    pub page: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>, // as written by the device, locale included
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: Option<String>,
    pub entries: Vec<AnnotationEntry>,
}

impl Book {
    fn new(identity: BookIdentity) -> Self {
        Book {
            title: identity.title,
            author: identity.author,
            entries: Vec::new(),
        }
    }
}

// Books keyed by exact title, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    books: Vec<Book>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn get(&self, title: &str) -> Option<&Book> {
        self.index.get(title).map(|&i| &self.books[i])
    }

    pub fn total_entries(&self) -> usize {
        self.books.iter().map(|book| book.entries.len()).sum()
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // The author seen first wins; later headers never overwrite it.
    pub fn push(mut self, identity: BookIdentity, entry: AnnotationEntry) -> Self {
        let i = match self.index.get(&identity.title) {
            Some(&i) => i,
            None => {
                let i = self.books.len();
                self.index.insert(identity.title.clone(), i);
                self.books.push(Book::new(identity));
                i
            }
        };

        self.books[i].entries.push(entry);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            books: self.books,
            index: self.index,
        }
    }
}
