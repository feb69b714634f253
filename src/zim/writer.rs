use std::{
    collections::HashMap,
    fmt,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator};

use crate::{
    clippings::model::{Book, Catalog},
    utility::{date::CreationDate, str::output_file_name},
    zim::renderer::render_book,
};

pub static CATALOG_JSON_FILE_NAME: &str = "catalog.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub books: usize,
    pub entries: usize,
    pub failed: usize,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} books, {} entries", self.books, self.entries)
    }
}

pub struct ZimWriter {
    root: PathBuf,
}

impl ZimWriter {
    pub fn init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create output directory: {}", root.display()))?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn book_path(&self, book: &Book) -> PathBuf {
        self.root.join(output_file_name(&book.title))
    }

    // An existing file at the same path is replaced.
    pub fn write_book(&self, book: &Book, created: &CreationDate) -> Result<PathBuf> {
        let path = self.book_path(book);
        let page = render_book(book, created);

        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(page.as_bytes())
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }

    // Books are written one after another. A book that cannot be written is
    // logged and left out of the summary; the others are still written.
    pub fn export_catalog(
        &self,
        catalog: &Catalog,
        created: &CreationDate,
        pb: ProgressBar,
    ) -> ExportSummary {
        let mut summary = ExportSummary::default();
        let mut written = HashMap::<PathBuf, &str>::new();

        for book in catalog.books().progress_with(pb) {
            match self.write_book(book, created) {
                Ok(path) => {
                    if let Some(previous) = written.insert(path.clone(), &book.title) {
                        tracing::warn!(
                            path = %path.display(),
                            previous,
                            title = %book.title,
                            "file name collision, previous book overwritten"
                        );
                    }
                    tracing::info!(
                        title = %book.title,
                        entries = book.entries.len(),
                        path = %path.display(),
                        "written"
                    );

                    summary.books += 1;
                    summary.entries += book.entries.len();
                }
                Err(e) => {
                    tracing::error!(title = %book.title, "{:#}", e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    pub fn save_catalog_json(&self, catalog: &Catalog) -> Result<PathBuf> {
        let path = self.root.join(CATALOG_JSON_FILE_NAME);
        fs::write(&path, serde_json::to_string_pretty(catalog)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}
