// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// A filter for the test runner, reconstructed from test explorer identifiers.
///
/// Both patterns are parenthesized alternations of regex-escaped fragments, suitable for
/// Jest's `--testPathPattern` and `--testNamePattern` flags.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFilter {
    /// Pattern matching the selected test files.
    pub test_file_name_pattern: String,

    /// Pattern matching the selected test names. `None` means every test in the matched files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name_pattern: Option<String>,
}

/// An annotation shown in the editor gutter next to a test.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct TestDecoration {
    /// The line to annotate.
    pub line: u32,

    /// A short message, typically the first line of the failure.
    pub message: String,
}
