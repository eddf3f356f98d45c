// wordstrip-core/src/codec.rs
//! Reading and writing delimited text (CSV) as [`Dataset`]s.
//!
//! Decoding takes the first row as the header, tolerates ragged rows, strips a
//! UTF-8 byte-order mark and discards rows whose every cell is blank. A header
//! name that repeats is renamed `name_1`, `name_2`, ... so no column is lost.
//! Encoding always writes a byte-order mark so spreadsheet tools detect UTF-8.

use std::collections::HashSet;

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, warn};

use crate::config::CodecOptions;
use crate::errors::WordstripError;
use crate::record::{Dataset, Record};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Removes a leading UTF-8 byte-order mark, if present.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Decodes CSV bytes into a dataset.
pub fn decode_csv(bytes: &[u8], options: &CodecOptions) -> Result<Dataset, WordstripError> {
    let text = std::str::from_utf8(strip_bom(bytes))
        .map_err(|e| WordstripError::Decode(format!("input is not valid UTF-8: {}", e)))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = unique_headers(
        reader
            .headers()
            .map_err(|e| WordstripError::Decode(format!("failed to read header row: {}", e)))?
            .iter(),
    );

    let mut records = Vec::new();
    let mut skipped_blank = 0usize;
    for (index, result) in reader.records().enumerate() {
        let row = result
            .map_err(|e| WordstripError::Decode(format!("failed to parse row {}: {}", index + 1, e)))?;

        if row.iter().all(|cell| cell.trim().is_empty()) {
            skipped_blank += 1;
            continue;
        }
        if row.len() > headers.len() {
            warn!(
                "Row {} has {} cells but the header has {}; extra cells are dropped.",
                index + 1,
                row.len(),
                headers.len()
            );
        }

        let record: Record = headers.iter().map(String::as_str).zip(row.iter()).collect();
        records.push(record);
    }

    debug!(
        "Decoded {} rows with {} fields ({} blank rows skipped).",
        records.len(),
        headers.len(),
        skipped_blank
    );
    Ok(Dataset::new(headers, records))
}

/// Renames repeated header names with a numeric suffix, skipping suffixes
/// that are already taken by another header.
fn unique_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let names: Vec<&str> = names.collect();
    let mut taken: HashSet<String> = names.iter().map(|n| n.to_string()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        if seen.insert(name) {
            out.push(name.to_string());
            continue;
        }
        let mut n = 1usize;
        let renamed = loop {
            let candidate = format!("{}_{}", name, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        warn!("Header '{}' repeats; the later column is named '{}'.", name, renamed);
        taken.insert(renamed.clone());
        out.push(renamed);
    }
    out
}

/// Encodes a dataset as CSV bytes, prefixed with a UTF-8 byte-order mark.
///
/// The header is [`Dataset::all_fields`]; fields a record lacks are written empty.
pub fn encode_csv(dataset: &Dataset, options: &CodecOptions) -> Result<Vec<u8>, WordstripError> {
    let fields = dataset.all_fields();
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .from_writer(UTF8_BOM.to_vec());

    writer
        .write_record(&fields)
        .map_err(|e| WordstripError::AnyhowWrapper(e.into()))?;
    for record in &dataset.records {
        let row = fields.iter().map(|field| record.get(field).unwrap_or(""));
        writer
            .write_record(row)
            .map_err(|e| WordstripError::AnyhowWrapper(e.into()))?;
    }

    writer
        .into_inner()
        .map_err(|e| WordstripError::Io(e.into_error()))
}
