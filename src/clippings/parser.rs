use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    header::parse_header,
    metadata::EntryMetadata,
    model::{AnnotationEntry, BookIdentity, Catalog, CatalogBuilder},
};

pub static DELIMITER: &str = "==========";

// Index of the body line within a segment: header, metadata, blank, body.
const TEXT_LINE_INDEX: usize = 3;

pub fn parse_clippings(txt: &str) -> Catalog {
    split_segments(txt)
        .iter()
        .filter_map(|segment| parse_segment(segment))
        .fold(CatalogBuilder::new(), |builder, (identity, entry)| {
            builder.push(identity, entry)
        })
        .build()
}

// Splits on delimiter lines. Each segment is trimmed and split into lines,
// blank lines kept.
pub fn split_segments(txt: &str) -> Vec<Vec<&str>> {
    // CR+LF, LF or a lone CR depending on where the export has been
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut line_start = 0;

    // (end of line, start of next line)
    let mut line_ends: Vec<(usize, usize)> = REGEX_NEW_LINE
        .find_iter(txt)
        .map(|m| (m.start(), m.end()))
        .collect();
    line_ends.push((txt.len(), txt.len()));

    for (end, next) in line_ends {
        if &txt[line_start..end] == DELIMITER {
            blocks.push(&txt[block_start..line_start]);
            block_start = next;
        }
        line_start = next;
    }
    blocks.push(&txt[block_start..]);

    blocks
        .into_iter()
        .map(|block| REGEX_NEW_LINE.split(block.trim()).collect())
        .collect()
}

fn parse_segment(lines: &[&str]) -> Option<(BookIdentity, AnnotationEntry)> {
    // Trailing content after the last delimiter and header-only blocks.
    if lines.len() < 2 {
        tracing::debug!(?lines, "skipping segment without metadata line");
        return None;
    }

    let Some(identity) = parse_header(lines[0]) else {
        tracing::debug!(header = lines[0], "skipping segment without header");
        return None;
    };

    let metadata = EntryMetadata::parse(lines[1]);

    let text = lines
        .get(TEXT_LINE_INDEX)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_owned());

    let entry = AnnotationEntry {
        kind: metadata.kind,
        page: metadata.page,
        location: metadata.location,
        date: metadata.date,
        text,
    };

    Some((identity, entry))
}
