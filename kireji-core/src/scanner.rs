//! The lazy entry scanner
//!
//! [`Split`] walks a borrowed source slice left to right, carving it into
//! entries at delimiter occurrences. Each `next()` call performs one
//! delimiter search plus bounded post-processing and returns; nothing is
//! buffered and nothing is copied.

use std::iter::FusedIterator;

use crate::delimiter::Delimiter;
use crate::options::SplitOptions;
use crate::postprocess;

/// Lazy iterator over the entries of a byte source.
///
/// Yields non-overlapping subslices of the source, in source byte order.
/// Entries borrow from the source and stay valid for its whole lifetime;
/// the cursor itself is single-pass and stays exhausted once exhausted.
/// Cloning produces an independent cursor positioned at the clone point.
///
/// The scanner always produces at least one raw entry, because the tail
/// after the last delimiter occurrence counts as an entry even when empty.
/// Splitting the empty source therefore yields one empty entry, unless
/// [`SplitOptions::REMOVE_EMPTY_ENTRIES`] suppresses it.
#[derive(Debug, Clone)]
pub struct Split<'a, 'd> {
    remaining: &'a [u8],
    delimiter: Delimiter<'d>,
    options: SplitOptions,
    source_len: usize,
    finished: bool,
}

impl<'a, 'd> Split<'a, 'd> {
    pub(crate) fn new(source: &'a [u8], delimiter: Delimiter<'d>, options: SplitOptions) -> Self {
        Split {
            remaining: source,
            delimiter,
            options,
            source_len: source.len(),
            finished: false,
        }
    }

    /// The delimiter this scanner splits on.
    pub fn delimiter(&self) -> Delimiter<'d> {
        self.delimiter
    }

    /// The post-processing options in effect.
    pub fn options(&self) -> SplitOptions {
        self.options
    }

    /// The portion of the source that has not been scanned yet.
    ///
    /// Returns the empty slice once the scanner has produced its final
    /// entry.
    pub fn remainder(&self) -> &'a [u8] {
        self.remaining
    }

    /// Length of the original source, used as the collector capacity hint.
    pub(crate) fn source_len(&self) -> usize {
        self.source_len
    }

    /// Produce the next raw entry, before post-processing.
    ///
    /// The `finished` flag is the one-shot tail marker: the slice after the
    /// last delimiter occurrence is an entry even when it is empty (an
    /// empty or delimiter-terminated source ends in an empty raw entry),
    /// and it must be produced exactly once.
    fn next_raw(&mut self) -> Option<&'a [u8]> {
        if self.finished {
            return None;
        }
        match self.delimiter.find_in(self.remaining) {
            Some(m) => {
                let entry = &self.remaining[..m.offset];
                self.remaining = &self.remaining[m.offset + m.len..];
                Some(entry)
            }
            None => {
                self.finished = true;
                let entry = self.remaining;
                self.remaining = &[];
                Some(entry)
            }
        }
    }
}

impl<'a> Iterator for Split<'a, '_> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        // Suppressed entries restart the search from the advanced cursor.
        // The cursor shrinks with every raw entry, so this terminates.
        loop {
            let raw = self.next_raw()?;
            if let Some(entry) = postprocess::apply(raw, self.options) {
                return Some(entry);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let lower = if self.options.contains(SplitOptions::REMOVE_EMPTY_ENTRIES) {
            0
        } else {
            1
        };
        // One-byte delimiters can at most alternate with empty entries,
        // plus the tail entry.
        (lower, Some(self.remaining.len() + 1))
    }
}

impl FusedIterator for Split<'_, '_> {}
