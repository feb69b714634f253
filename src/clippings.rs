// "My Clippings.txt" as exported by Kindle devices
//
//   <title> (<last>, <first>)
//   - Your Highlight on page 12 | Location 180-182 | Added on <date>
//
//   <text>
//   ==========
//
// Irregular content is never an error: segments without a header or a
// metadata line are dropped, and fields that cannot be found are left empty.

pub mod header;
pub mod metadata;
pub mod model;
pub mod parser;

use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};

// Reads the whole export. A leading BOM is removed; anything that is not UTF-8
// is rejected.
pub fn read_clippings_file(path: &Path) -> Result<String> {
    ensure!(path.exists(), "File not found: {}", path.display());

    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    decode_clippings(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

pub fn decode_clippings(bytes: &[u8]) -> Result<String> {
    let (txt, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    ensure!(!had_errors, "Not a UTF-8 text");

    Ok(txt.into_owned())
}
