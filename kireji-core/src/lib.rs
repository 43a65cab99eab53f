//! Allocation-free splitting of UTF-8 byte strings
//!
//! This crate splits a borrowed byte slice on a single byte, an exact byte
//! sequence, or a set of alternative delimiters, without copying the source.
//! Scanning is lazy: [`Split`] is a pull-based iterator that performs one
//! delimiter search per step and yields borrowed subslices.
//!
//! Delimiter sets decompose per UTF-8 codepoint by default, so a multi-byte
//! character in the set acts as one candidate; byte mode makes every byte of
//! the set its own candidate instead.
//!
//! ```
//! use kireji_core::{split, split_any, split_with, SplitOptions};
//!
//! let entries: Vec<&[u8]> = split(b"1,2,3", b',').collect();
//! assert_eq!(entries, [b"1", b"2", b"3"]);
//!
//! let entries: Vec<&[u8]> = split_any(b"1,2-3;4", b",-;").collect();
//! assert_eq!(entries, [b"1", b"2", b"3", b"4"]);
//!
//! let entries = split_with(b" a ,, b ", b',', SplitOptions::TRIM_ENTRIES)
//!     .unwrap()
//!     .collect_decoded();
//! assert_eq!(entries, ["a", "", "b"]);
//! ```

#![warn(missing_docs)]

pub mod delimiter;
pub mod error;
pub mod options;
pub mod scanner;

mod collect;
mod postprocess;
mod utf8;

pub use delimiter::Delimiter;
pub use error::{Result, SplitError};
pub use options::{DelimiterMode, SplitOptions};
pub use scanner::Split;

/// Split `source` on `delimiter` with no post-processing.
///
/// The delimiter may be a single byte, a byte slice, or a byte-string
/// literal. An empty delimiter never matches, so the whole source comes
/// back as one entry. Splitting an empty source yields one empty entry.
pub fn split<'a, 'd>(source: &'a [u8], delimiter: impl Into<Delimiter<'d>>) -> Split<'a, 'd> {
    Split::new(source, delimiter.into(), SplitOptions::empty())
}

/// Split `source` on `delimiter`, applying `options` to every entry.
///
/// Fails fast with [`SplitError::InvalidOptions`] when `options` carries
/// unrecognized bits; no scanning happens in that case.
pub fn split_with<'a, 'd>(
    source: &'a [u8],
    delimiter: impl Into<Delimiter<'d>>,
    options: SplitOptions,
) -> Result<Split<'a, 'd>> {
    options.validate()?;
    Ok(Split::new(source, delimiter.into(), options))
}

/// Split `source` on any delimiter from `set`, decomposed per codepoint.
///
/// Equivalent to [`split_any_with`] with empty options and
/// [`DelimiterMode::Codepoint`].
pub fn split_any<'a, 'd>(source: &'a [u8], set: &'d [u8]) -> Split<'a, 'd> {
    Split::new(
        source,
        Delimiter::any_of(set, DelimiterMode::Codepoint),
        SplitOptions::empty(),
    )
}

/// Split `source` on any delimiter from `set` with explicit options and
/// decomposition mode.
///
/// Fails fast with [`SplitError::InvalidOptions`] when `options` carries
/// unrecognized bits; no scanning happens in that case.
pub fn split_any_with<'a, 'd>(
    source: &'a [u8],
    set: &'d [u8],
    options: SplitOptions,
    mode: DelimiterMode,
) -> Result<Split<'a, 'd>> {
    options.validate()?;
    Ok(Split::new(source, Delimiter::any_of(set, mode), options))
}
