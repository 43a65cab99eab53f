//! Split options and delimiter-set interpretation modes

use bitflags::bitflags;

use crate::error::{Result, SplitError};

bitflags! {
    /// Post-processing options applied to each scanned entry.
    ///
    /// The empty value leaves entries untouched. Values built from the named
    /// constants are always valid; a raw bit pattern smuggled in through
    /// [`SplitOptions::from_bits_retain`] is rejected by the options-taking
    /// entry points before any scanning starts.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SplitOptions: u32 {
        /// Suppress entries that are empty after trimming.
        const REMOVE_EMPTY_ENTRIES = 1 << 0;
        /// Strip leading and trailing ASCII space (0x20) from each entry.
        const TRIM_ENTRIES = 1 << 1;
    }
}

impl SplitOptions {
    /// Reject values carrying bits outside the supported set.
    pub(crate) fn validate(self) -> Result<()> {
        if self.bits() & !Self::all().bits() != 0 {
            return Err(SplitError::InvalidOptions { bits: self.bits() });
        }
        Ok(())
    }
}

/// How a delimiter set decomposes into candidate delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterMode {
    /// One candidate per UTF-8 codepoint in the set
    #[default]
    Codepoint,
    /// One candidate per byte in the set
    Byte,
}
