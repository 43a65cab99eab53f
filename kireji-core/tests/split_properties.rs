//! Behavioral properties of the split API

use kireji_core::{split, split_any, split_any_with, split_with, DelimiterMode, SplitOptions};
use proptest::prelude::*;

/// Count non-overlapping left-to-right occurrences of `needle`.
fn count_occurrences(mut haystack: &[u8], needle: &[u8]) -> usize {
    assert!(!needle.is_empty());
    let mut count = 0;
    while let Some(pos) = haystack.windows(needle.len()).position(|w| w == needle) {
        count += 1;
        haystack = &haystack[pos + needle.len()..];
    }
    count
}

proptest! {
    /// Joining the entries with the delimiter reconstructs the source, and
    /// the entry count is the occurrence count plus one.
    #[test]
    fn reconstruction_round_trip(
        source in proptest::collection::vec(any::<u8>(), 0..256),
        delimiter in proptest::collection::vec(any::<u8>(), 1..4),
    ) {
        let entries = split(&source, &delimiter[..]).collect_owned();
        prop_assert_eq!(entries.join(&delimiter[..]), source.clone());
        prop_assert_eq!(entries.len(), count_occurrences(&source, &delimiter) + 1);
    }

    /// A single-byte set in byte mode behaves exactly like the single-byte
    /// delimiter.
    #[test]
    fn byte_mode_single_byte_equivalence(
        source in proptest::collection::vec(any::<u8>(), 0..256),
        delimiter in any::<u8>(),
    ) {
        let direct = split(&source, delimiter).collect_owned();
        let via_set = split_any_with(
            &source,
            std::slice::from_ref(&delimiter),
            SplitOptions::empty(),
            DelimiterMode::Byte,
        )
        .unwrap()
        .collect_owned();
        prop_assert_eq!(direct, via_set);
    }

    /// Collecting and manual iteration agree positionally.
    #[test]
    fn collect_owned_matches_manual_iteration(
        source in proptest::collection::vec(any::<u8>(), 0..256),
        delimiter in any::<u8>(),
    ) {
        let manual: Vec<Vec<u8>> = split(&source, delimiter).map(<[u8]>::to_vec).collect();
        let collected = split(&source, delimiter).collect_owned();
        prop_assert_eq!(manual, collected);
    }

    /// Trimming never leaves an entry with a space at either end, and with
    /// removal enabled no empty entry survives.
    #[test]
    fn post_processing_invariants(
        source in proptest::collection::vec(any::<u8>(), 0..256),
        delimiter in any::<u8>(),
    ) {
        let trimmed = split_with(&source, delimiter, SplitOptions::TRIM_ENTRIES).unwrap();
        for entry in trimmed {
            prop_assert!(entry.first() != Some(&b' '));
            prop_assert!(entry.last() != Some(&b' '));
        }

        let cleaned = split_with(
            &source,
            delimiter,
            SplitOptions::TRIM_ENTRIES | SplitOptions::REMOVE_EMPTY_ENTRIES,
        )
        .unwrap();
        for entry in cleaned {
            prop_assert!(!entry.is_empty());
        }
    }
}

#[test]
fn empty_source_yields_one_empty_entry_for_any_delimiter() {
    for entries in [
        split(b"", b',').collect_owned(),
        split(b"", b"--").collect_owned(),
        split(b"", b"").collect_owned(),
        split_any(b"", b",;").collect_owned(),
    ] {
        assert_eq!(entries, [Vec::<u8>::new()]);
    }
}

#[test]
fn empty_source_with_remove_empty_yields_nothing() {
    let entries = split_with(b"", b',', SplitOptions::REMOVE_EMPTY_ENTRIES)
        .unwrap()
        .collect_owned();
    assert!(entries.is_empty());

    let entries = split_with(b"", b"", SplitOptions::REMOVE_EMPTY_ENTRIES)
        .unwrap()
        .collect_owned();
    assert!(entries.is_empty());
}

#[test]
fn comma_separated_digits() {
    assert_eq!(
        split(b"1,2,3,4,5", b',').collect_decoded(),
        ["1", "2", "3", "4", "5"]
    );
}

#[test]
fn trim_keeps_empty_entries() {
    assert_eq!(
        split_with(b" , 1 , 2,3 ,,4, 5,  ", b',', SplitOptions::TRIM_ENTRIES)
            .unwrap()
            .collect_decoded(),
        ["", "1", "2", "3", "", "4", "5", ""]
    );
}

#[test]
fn trim_and_remove_keeps_only_payload() {
    assert_eq!(
        split_with(
            b" , 1 , 2,3 ,,4, 5,  ",
            b',',
            SplitOptions::TRIM_ENTRIES | SplitOptions::REMOVE_EMPTY_ENTRIES,
        )
        .unwrap()
        .collect_decoded(),
        ["1", "2", "3", "4", "5"]
    );
}

#[test]
fn sequence_and_byte_set_disagree_on_repeated_bytes() {
    let source = b"1--2--3--4--5";

    // As one two-byte literal, "--" separates cleanly.
    assert_eq!(
        split(source, b"--").collect_decoded(),
        ["1", "2", "3", "4", "5"]
    );

    // As a byte set, "--" is the single candidate '-' twice over, so each
    // pair of dashes produces an empty entry between two matches.
    assert_eq!(
        split_any_with(source, b"--", SplitOptions::empty(), DelimiterMode::Byte)
            .unwrap()
            .collect_decoded(),
        ["1", "", "2", "", "3", "", "4", "", "5"]
    );
}

#[test]
fn codepoint_set_treats_three_byte_character_as_one_candidate() {
    let source = "1あ2あ3".as_bytes();
    let set = "あ".as_bytes();

    assert_eq!(split_any(source, set).collect_decoded(), ["1", "2", "3"]);

    // Byte mode splits on each of the three constituent bytes.
    assert_eq!(
        split_any_with(source, set, SplitOptions::empty(), DelimiterMode::Byte)
            .unwrap()
            .collect_decoded(),
        ["1", "", "", "2", "", "", "3"]
    );
}

#[test]
fn mixed_set_splits_on_every_member() {
    assert_eq!(
        split_any(b"1,2-3;4-5", b"-,;").collect_decoded(),
        ["1", "2", "3", "4", "5"]
    );
}

#[test]
fn invalid_option_bits_fail_before_scanning() {
    let bad = SplitOptions::from_bits_retain(0b1000);
    assert!(split_with(b"a", b',', bad).is_err());
    assert!(split_any_with(b"a", b",", bad, DelimiterMode::Codepoint).is_err());
}
