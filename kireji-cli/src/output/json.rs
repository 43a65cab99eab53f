//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs entries as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryData {
    /// The entry text
    pub text: String,
    /// Zero-based position of the entry in the split sequence
    pub index: usize,
    /// Length of the entry in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &str, index: usize) -> Result<()> {
        self.entries.push(EntryData {
            text: entry.to_string(),
            index,
            length: entry.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
