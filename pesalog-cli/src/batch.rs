//! Batch collaborator: one notification per non-empty file line,
//! log-and-continue on parse failures.

use anyhow::{Context, Result};
use pesalog_core::MessageParser;
use std::fs;
use std::path::Path;

use crate::render;

pub struct BatchSummary {
    pub parsed: usize,
    pub failed: usize,
}

/// Parse every non-empty line of `path`, printing each record (or a JSON
/// object per line when `json` is set) and logging failed lines to stderr.
pub fn run(parser: &MessageParser, path: &Path, json: bool) -> Result<BatchSummary> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut summary = BatchSummary { parsed: 0, failed: 0 };

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parser.parse(line) {
            Ok(record) => {
                summary.parsed += 1;
                if json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("message: {line}");
                    render::print_record(&record);
                    println!();
                }
            }
            Err(err) => {
                summary.failed += 1;
                eprintln!("line {}: {err}", index + 1);
            }
        }
    }

    Ok(summary)
}
