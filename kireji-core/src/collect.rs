//! Materialization helpers
//!
//! Convenience drains that turn the lazy scanner into owned collections.
//! Both consume the scanner by value; a drained cursor cannot be reused.

use crate::scanner::Split;

impl Split<'_, '_> {
    /// Drain the scanner into independently owned byte buffers.
    ///
    /// The collection is pre-sized with the source length as a capacity
    /// hint, the upper bound on how many entries one source can produce.
    pub fn collect_owned(self) -> Vec<Vec<u8>> {
        let mut entries = Vec::with_capacity(self.source_len());
        for entry in self {
            entries.push(entry.to_vec());
        }
        entries
    }

    /// Drain the scanner, decoding each entry as UTF-8 text.
    ///
    /// Ill-formed sequences decode to replacement characters. Zero-length
    /// entries become empty strings without touching the decoder.
    pub fn collect_decoded(self) -> Vec<String> {
        let mut entries = Vec::with_capacity(self.source_len());
        for entry in self {
            if entry.is_empty() {
                entries.push(String::new());
            } else {
                entries.push(String::from_utf8_lossy(entry).into_owned());
            }
        }
        entries
    }
}
