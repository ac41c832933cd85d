//! Fuzz target for substring search and the edits built on it.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ringtext::StrExt;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    pattern: &'a str,
    replacement: &'a str,
    case_sensitive: bool,
}

fuzz_target!(|input: Input<'_>| {
    let overlap = input.text.indexes_of(input.pattern, true, input.case_sensitive);
    let disjoint = input.text.indexes_of(input.pattern, false, input.case_sensitive);
    assert!(disjoint.len() <= overlap.len());
    assert!(overlap.windows(2).all(|w| w[0] < w[1]));

    let _ = input.text.replaced_substring(input.pattern, input.replacement);
    let _ = input.text.removed_substring(input.pattern);
    let _ = input.text.most_common_characters(input.case_sensitive, true);
    let _ = input.text.most_common_of(ringtext::CharClass::LETTER, input.case_sensitive);
    let _ = input.text.repeated_substring(input.case_sensitive);
});
