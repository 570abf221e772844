// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The response produced by a Jest run, as handed to the adapter.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct JestResponse {
    /// The aggregated results of the run.
    pub results: JestTotalResults,
}

impl JestResponse {
    /// Parses a `JestResponse` from a JSON string.
    pub fn parse_json(json: impl AsRef<str>) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

impl From<JestTotalResults> for JestResponse {
    fn from(results: JestTotalResults) -> Self {
        Self { results }
    }
}

/// Aggregated results for a Jest run: the output of `jest --json`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JestTotalResults {
    /// Whether the run succeeded.
    #[serde(default)]
    pub success: bool,

    /// The number of test files with at least one failure.
    #[serde(default)]
    pub num_failed_test_suites: usize,

    /// The number of failed assertions.
    #[serde(default)]
    pub num_failed_tests: usize,

    /// The number of passing test files.
    #[serde(default)]
    pub num_passed_test_suites: usize,

    /// The number of passing assertions.
    #[serde(default)]
    pub num_passed_tests: usize,

    /// The number of pending assertions.
    #[serde(default)]
    pub num_pending_tests: usize,

    /// The total number of test files.
    #[serde(default)]
    pub num_total_test_suites: usize,

    /// The total number of assertions.
    #[serde(default)]
    pub num_total_tests: usize,

    /// Per-file results, in the order Jest reported them.
    #[serde(default)]
    pub test_results: Vec<JestFileResult>,
}

impl JestTotalResults {
    /// Parses `jest --json` output.
    pub fn parse_json(json: impl AsRef<str>) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

/// Results for a single test file.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JestFileResult {
    /// The absolute path to the test file.
    pub name: Utf8PathBuf,

    /// The overall status of the file, e.g. `passed` or `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The failure message for the file as a whole, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The assertions in this file, in declaration order.
    #[serde(default)]
    pub assertion_results: Vec<JestAssertionResult>,
}

/// The result of a single test case (an `it` or `test` call).
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JestAssertionResult {
    /// The title passed to `it`/`test`.
    pub title: String,

    /// The title prefixed by all of the enclosing `describe` titles.
    #[serde(default)]
    pub full_name: String,

    /// Enclosing `describe` titles, outermost first.
    #[serde(default)]
    pub ancestor_titles: Vec<String>,

    /// The status reported by Jest.
    #[serde(default)]
    pub status: JestAssertionStatus,

    /// Failure messages, including stack traces. Empty unless the assertion failed.
    #[serde(default)]
    pub failure_messages: Vec<String>,

    /// The source location of the test, if Jest was run with `--testLocationInResults`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// The status of an assertion as reported by Jest.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum JestAssertionStatus {
    /// The assertion passed.
    Passed,

    /// The assertion failed.
    Failed,

    /// The assertion was skipped with `it.skip` or similar.
    Pending,

    /// The assertion was skipped.
    Skipped,

    /// The assertion is a `test.todo`.
    Todo,

    /// The assertion was disabled.
    Disabled,

    /// The assertion was focused with `it.only`.
    Focused,

    /// A status not known to this version of the adapter.
    #[default]
    Unknown,

    /// Any other status string, kept verbatim.
    Other(String),
}

impl JestAssertionStatus {
    /// Returns the status as it appears in Jest's JSON output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Skipped => "skipped",
            Self::Todo => "todo",
            Self::Disabled => "disabled",
            Self::Focused => "focused",
            Self::Unknown => "unknown",
            Self::Other(other) => other,
        }
    }

    /// Returns true if this status means the assertion did not run.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Skipped | Self::Todo | Self::Disabled
        )
    }
}

impl From<String> for JestAssertionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            "pending" => Self::Pending,
            "skipped" => Self::Skipped,
            "todo" => Self::Todo,
            "disabled" => Self::Disabled,
            "focused" => Self::Focused,
            "unknown" => Self::Unknown,
            _ => Self::Other(s),
        }
    }
}

impl From<JestAssertionStatus> for String {
    fn from(status: JestAssertionStatus) -> Self {
        match status {
            JestAssertionStatus::Other(other) => other,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for JestAssertionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position within a source file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Location {
    /// The line number.
    pub line: u32,

    /// The column number.
    #[serde(default)]
    pub column: u32,
}
