//! Delimited text (`.csv`) reader.

use std::borrow::Cow;

use super::columns::{RawCell, build_outcome, canonical_header};
use super::types::{ImportOutcome, ImportWarning};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a comma or semicolon separated file.
///
/// Input is decoded as UTF-8, falling back to Latin-1.
pub fn read(bytes: &[u8]) -> ImportOutcome {
    let text = decode(bytes);
    let delimiter = detect_delimiter(&text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(record) => record.iter().map(canonical_header).collect(),
        Err(e) => {
            return ImportOutcome::with_warning(ImportWarning::Unreadable {
                reason: e.to_string(),
            });
        }
    };

    let rows = reader.records().map(|record| match record {
        Ok(record) => record.iter().map(RawCell::text).collect(),
        Err(e) => {
            tracing::debug!(error = %e, "Skipping malformed CSV record");
            vec![RawCell::Invalid]
        }
    });

    build_outcome(&headers, rows)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
    }
}

/// Picks `;` when the header line has more semicolons than commas.
fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}
