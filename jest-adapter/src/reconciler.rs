// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved pass/fail/skip status for assertions from earlier runs.
//!
//! The tree mappers consult a [`StatusReconciler`] when one is supplied, to fill in source lines,
//! skip flags and gutter decorations. [`TestReconciler`] is the standard implementation, fed with
//! the output of `jest --json`.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use jest_adapter_metadata::{
    JestAssertionResult, JestAssertionStatus, JestFileResult, JestTotalResults,
};
use regex::Regex;
use tracing::debug;

/// Looks up previously computed assertion statuses for a test file.
pub trait StatusReconciler {
    /// Returns the statuses recorded for `file`, or `None` if the file is unknown.
    fn assertions_for_test_file(&self, file: &Utf8Path) -> Option<&[TestAssertionStatus]>;
}

/// What is known about the outcome of an assertion or file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TestReconciliationState {
    /// No outcome is known.
    #[default]
    Unknown,

    /// The assertion (or every assertion in the file) passed.
    KnownSuccess,

    /// The assertion (or at least one assertion in the file) failed.
    KnownFail,

    /// The assertion was skipped.
    KnownSkip,
}

impl TestReconciliationState {
    fn from_jest_status(status: &JestAssertionStatus) -> Self {
        match status {
            JestAssertionStatus::Passed => Self::KnownSuccess,
            JestAssertionStatus::Failed => Self::KnownFail,
            status if status.is_skip() => Self::KnownSkip,
            _ => Self::Unknown,
        }
    }
}

/// The resolved status of a single assertion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestAssertionStatus {
    /// The title of the test.
    pub title: String,

    /// The title prefixed by the `describe` chain.
    pub full_name: String,

    /// Enclosing `describe` titles, outermost first.
    pub ancestor_titles: Vec<String>,

    /// The resolved state.
    pub status: TestReconciliationState,

    /// The full failure message with terminal escapes removed. Empty if the assertion didn't
    /// fail.
    pub message: String,

    /// The first meaningful line of the failure message.
    pub terse_message: Option<String>,

    /// The line to attach the status to: the failing frame for failures, the test's own location
    /// otherwise.
    pub line: Option<u32>,
}

impl TestAssertionStatus {
    fn from_assertion(file: &Utf8Path, assertion: &JestAssertionResult) -> Self {
        let status = TestReconciliationState::from_jest_status(&assertion.status);
        let message = if assertion.failure_messages.is_empty() {
            String::new()
        } else {
            strip_ansi_escapes::strip_str(assertion.failure_messages.join("\n"))
        };

        let location_line = assertion.location.map(|location| location.line);
        let line = if status == TestReconciliationState::KnownFail {
            line_of_error(&message, file).or(location_line)
        } else {
            location_line
        };

        Self {
            title: assertion.title.clone(),
            full_name: assertion.full_name.clone(),
            ancestor_titles: assertion.ancestor_titles.clone(),
            status,
            terse_message: terse_message(&message),
            message,
            line,
        }
    }
}

/// The resolved status of every assertion in a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestFileAssertionStatus {
    /// The test file.
    pub file: Utf8PathBuf,

    /// The state of the file as a whole.
    pub status: TestReconciliationState,

    /// The file-level failure message, if any.
    pub message: String,

    /// Per-assertion statuses, in the order Jest reported them.
    pub assertions: Vec<TestAssertionStatus>,
}

impl TestFileAssertionStatus {
    fn from_file_result(result: &JestFileResult) -> Self {
        let assertions: Vec<_> = result
            .assertion_results
            .iter()
            .map(|assertion| TestAssertionStatus::from_assertion(&result.name, assertion))
            .collect();

        let any_failed = assertions
            .iter()
            .any(|assertion| assertion.status == TestReconciliationState::KnownFail);
        let status = match result.status.as_deref() {
            Some("failed") => TestReconciliationState::KnownFail,
            _ if any_failed => TestReconciliationState::KnownFail,
            Some("passed") => TestReconciliationState::KnownSuccess,
            _ => TestReconciliationState::Unknown,
        };

        Self {
            file: result.name.clone(),
            status,
            message: result
                .message
                .as_deref()
                .map(strip_ansi_escapes::strip_str)
                .unwrap_or_default(),
            assertions,
        }
    }
}

/// Stores assertion statuses per test file, replacing a file's entry each time new results for it
/// arrive.
#[derive(Clone, Debug, Default)]
pub struct TestReconciler {
    files: IndexMap<Utf8PathBuf, TestFileAssertionStatus>,
}

impl TestReconciler {
    /// Creates an empty reconciler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the statuses in `results`, returning the per-file statuses that were recorded.
    pub fn update_file_with_jest_status(
        &mut self,
        results: &JestTotalResults,
    ) -> Vec<TestFileAssertionStatus> {
        results
            .test_results
            .iter()
            .map(|file_result| {
                let file_status = TestFileAssertionStatus::from_file_result(file_result);
                debug!(
                    "recorded {} assertion statuses for {}",
                    file_status.assertions.len(),
                    file_status.file,
                );
                self.files
                    .insert(file_status.file.clone(), file_status.clone());
                file_status
            })
            .collect()
    }

    /// Returns the state of a file as a whole.
    pub fn state_for_test_file(&self, file: &Utf8Path) -> TestReconciliationState {
        self.files
            .get(file)
            .map_or(TestReconciliationState::Unknown, |file_status| {
                file_status.status
            })
    }

    /// Forgets everything recorded for `file`.
    pub fn remove_file(&mut self, file: &Utf8Path) -> Option<TestFileAssertionStatus> {
        self.files.shift_remove(file)
    }

    /// Returns the files with recorded statuses, in the order they were first recorded.
    pub fn file_names(&self) -> impl Iterator<Item = &Utf8Path> {
        self.files.keys().map(|file| file.as_path())
    }
}

impl StatusReconciler for TestReconciler {
    fn assertions_for_test_file(&self, file: &Utf8Path) -> Option<&[TestAssertionStatus]> {
        self.files
            .get(file)
            .map(|file_status| file_status.assertions.as_slice())
    }
}

/// Finds the recorded status for `assertion`, matching on its title. The first match wins.
pub(crate) fn assertion_status<'a>(
    assertion: &JestAssertionResult,
    file: &Utf8Path,
    reconciler: Option<&'a dyn StatusReconciler>,
) -> Option<&'a TestAssertionStatus> {
    reconciler?
        .assertions_for_test_file(file)?
        .iter()
        .find(|status| status.title == assertion.title)
}

/// Returns the line of the first stack frame in `message` that points into `file`.
fn line_of_error(message: &str, file: &Utf8Path) -> Option<u32> {
    let frame = Regex::new(&format!(r"{}:(\d+):\d+", regex::escape(file.as_str()))).ok()?;
    frame
        .captures(message)
        .and_then(|captures| captures.get(1))
        .and_then(|line| line.as_str().parse().ok())
}

fn terse_message(message: &str) -> Option<String> {
    message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("at "))
        .map(str::to_owned)
}
