//! Record batch parsing.
//!
//! Input is a sequence of blocks separated by blank lines. Each block is one
//! record made of whitespace-separated `key:value` tokens, which may span
//! several lines:
//!
//! ```text
//! ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
//! byr:1937 iyr:2017 cid:147 hgt:183cm
//!
//! iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
//! hcl:#cfa07d byr:1929
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::record::Record;

/// Parse a whole batch.
///
/// Tokens split at their first `:`, so values may contain further colons and
/// may be empty. A repeated key keeps its last value. Whitespace-only blocks
/// are skipped.
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for block in split_blocks(input) {
        let record = parse_record(block)
            .with_context(|| format!("Failed to parse record {}", records.len() + 1))?;
        records.push(record);
    }
    tracing::debug!(count = records.len(), "parsed record batch");
    Ok(records)
}

/// Parse one block of `key:value` tokens.
pub fn parse_record(block: &str) -> Result<Record> {
    let mut record = Record::new();
    for token in block.split_whitespace() {
        let (key, value) = token
            .split_once(':')
            .with_context(|| format!("Field token '{}' has no ':' separator", token))?;
        if key.is_empty() {
            anyhow::bail!("Field token '{}' has an empty name", token);
        }
        if record.contains(key) {
            tracing::warn!(field = key, "duplicate field, keeping last value");
        }
        record.insert(key, value);
    }
    Ok(record)
}

/// Read and parse a batch file. A path of `-` reads standard input.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read records from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read records from {}", path.display()))?
    };

    parse_records(&content).with_context(|| format!("Invalid record batch in {}", path.display()))
}

/// Split on runs of blank lines, dropping empty blocks.
fn split_blocks(input: &str) -> impl Iterator<Item = &str> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                blocks.push(&input[s..end]);
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        blocks.push(&input[s..end]);
    }

    blocks.into_iter()
}
