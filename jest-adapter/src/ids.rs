// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifiers for test explorer nodes.
//!
//! Identifiers double as merge keys while building trees and as the input to
//! [`parse_ids_to_filter`], which turns a selection made in the UI back into a [`TestFilter`].
//!
//! File and test names are escaped with [`regex::escape`] before they are embedded, so an
//! identifier is a valid regex fragment. Escaping turns `#` and `~` into `\#` and `\~`, so a
//! separator whose first character follows an odd run of backslashes belongs to the name, not
//! the identifier structure.

use indexmap::IndexSet;
use jest_adapter_metadata::{JestAssertionResult, TestFilter, TestSuiteInfo};
use std::borrow::Cow;

/// Separates the file portion of an identifier from the test portion.
pub const TEST_ID_SEPARATOR: &str = "##";

/// Separates `describe` blocks from each other in a full test identifier.
pub const DESCRIBE_ID_SEPARATOR: &str = "~~";

/// The identifier of the synthetic root suite. Selecting it means "run everything".
pub const ROOT_ID: &str = TestSuiteInfo::ROOT_ID;

/// Builds the identifier for a test (or `describe` chain) within a file.
///
/// The identifier is lowercased, so it compares case-insensitively.
pub fn test_id(file: &str, test_name: &str) -> String {
    format!(
        "{}{TEST_ID_SEPARATOR}^{}$",
        regex::escape(file),
        regex::escape(test_name)
    )
    .to_lowercase()
}

/// Builds an anchored pattern matching the full name of an assertion.
pub fn assertion_id(result: &JestAssertionResult) -> String {
    format!("^{}$", regex::escape(&result.full_name))
}

/// Builds a human-readable identifier from the file, the `describe` chain and the title.
///
/// Unlike [`test_id`], nothing is escaped. A leading Windows drive letter is lowercased since
/// Jest doesn't report it with consistent casing.
pub fn full_test_id(assertion: &JestAssertionResult, file_name: &str) -> String {
    let file_name = normalize_drive_letter(file_name);

    let mut id = file_name.into_owned();
    for title in &assertion.ancestor_titles {
        id.push_str(DESCRIBE_ID_SEPARATOR);
        id.push_str(title);
    }
    id.push_str(TEST_ID_SEPARATOR);
    id.push_str(&assertion.title);
    id
}

fn normalize_drive_letter(file_name: &str) -> Cow<'_, str> {
    match file_name.as_bytes() {
        [letter, b':', b'\\', ..] if letter.is_ascii_uppercase() => {
            let mut normalized = file_name.to_owned();
            normalized[..1].make_ascii_lowercase();
            Cow::Owned(normalized)
        }
        _ => Cow::Borrowed(file_name),
    }
}

/// Converts identifiers selected in the UI into a filter for the test runner.
///
/// Returns `None` if the first identifier is the root, meaning that every test should run.
/// Otherwise each identifier contributes its first segment as a file name and, if it has more
/// than one segment, its last segment as a test name. Duplicates are dropped, and first-seen
/// order is preserved.
pub fn parse_ids_to_filter<I, S>(ids: I) -> Option<TestFilter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: Vec<S> = ids.into_iter().collect();
    if ids.first().is_some_and(|id| id.as_ref() == ROOT_ID) {
        return None;
    }

    let mut file_names = IndexSet::new();
    let mut test_names = IndexSet::new();
    for id in &ids {
        let segments = split_id(id.as_ref());
        if let Some((first, rest)) = segments.split_first() {
            file_names.insert(*first);
            if let Some(last) = rest.last() {
                test_names.insert(*last);
            }
        }
    }

    tracing::trace!(
        "parsed {} ids into {} file names and {} test names",
        ids.len(),
        file_names.len(),
        test_names.len(),
    );

    Some(TestFilter {
        test_file_name_pattern: alternation(&file_names),
        test_name_pattern: (!test_names.is_empty()).then(|| alternation(&test_names)),
    })
}

/// Splits an identifier on either separator, leftmost match first. Separators starting with an
/// escaped character are skipped.
fn split_id(id: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < id.len() {
        let rest = &id[pos..];
        let separator = [TEST_ID_SEPARATOR, DESCRIBE_ID_SEPARATOR]
            .into_iter()
            .find(|sep| rest.starts_with(sep));
        match separator {
            Some(sep) if !is_escaped(id, pos) => {
                segments.push(&id[start..pos]);
                pos += sep.len();
                start = pos;
            }
            _ => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    segments.push(&id[start..]);
    segments
}

/// Returns true if the character at `pos` follows an odd run of backslashes.
fn is_escaped(id: &str, pos: usize) -> bool {
    id[..pos].bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn alternation(fragments: &IndexSet<&str>) -> String {
    let escaped: Vec<_> = fragments.iter().map(|f| regex::escape(f)).collect();
    format!("({})", escaped.join("|"))
}
