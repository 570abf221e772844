// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Top-level entry points: Jest results and parse results in, a single rooted tree out.

use crate::{
    config::TreeLabels,
    ids::test_id,
    reconciler::{StatusReconciler, assertion_status},
    tree::{build_file_result_tree, build_file_tree, merge},
};
use camino::Utf8Path;
use debug_ignore::DebugIgnore;
use jest_adapter_metadata::{
    JestAssertionResult, JestResponse, ParseResult, TestDecoration, TestInfo, TestNode,
    TestSuiteInfo,
};
use tracing::debug;

/// Maps Jest output to test explorer trees.
///
/// Every tree produced hangs off a synthetic root suite with identifier `"root"`.
#[derive(Clone, Debug)]
pub struct TestTreeMapper<'a> {
    work_dir: &'a Utf8Path,
    labels: TreeLabels,
    reconciler: DebugIgnore<Option<&'a dyn StatusReconciler>>,
}

impl<'a> TestTreeMapper<'a> {
    /// Creates a new mapper. File paths are made relative to `work_dir` when building directory
    /// suites.
    pub fn new(work_dir: &'a Utf8Path) -> Self {
        Self {
            work_dir,
            labels: TreeLabels::default(),
            reconciler: DebugIgnore(None),
        }
    }

    /// Sets the labels for the root suite and for unnamed tests.
    pub fn set_labels(&mut self, labels: TreeLabels) -> &mut Self {
        self.labels = labels;
        self
    }

    /// Sets the reconciler used to resolve lines and skip flags for test results.
    pub fn set_reconciler(&mut self, reconciler: &'a dyn StatusReconciler) -> &mut Self {
        self.reconciler = DebugIgnore(Some(reconciler));
        self
    }

    /// Maps the results of a Jest run to a tree.
    pub fn map_results(&self, response: &JestResponse) -> TestSuiteInfo {
        let file_trees = response
            .results
            .test_results
            .iter()
            .map(|file_result| {
                TestNode::Suite(build_file_result_tree(
                    file_result,
                    self.work_dir,
                    *self.reconciler,
                ))
            })
            .collect();

        self.root(file_trees)
    }

    /// Maps statically parsed test files to a tree.
    ///
    /// Files without any test blocks are left out.
    pub fn map_parse(&self, parsed_files: &[ParseResult]) -> TestSuiteInfo {
        let file_trees = parsed_files
            .iter()
            .filter_map(|parsed| self.map_parse_file(parsed))
            .map(TestNode::Suite)
            .collect();

        self.root(file_trees)
    }

    fn map_parse_file(&self, parsed: &ParseResult) -> Option<TestSuiteInfo> {
        let Some(last_block) = parsed.it_blocks.last() else {
            debug!("skipping {}: no test blocks found", parsed.file);
            return None;
        };

        let tests = parsed
            .it_blocks
            .iter()
            .map(|block| {
                let name = block
                    .name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .unwrap_or(&self.labels.unnamed_test_label);
                TestNode::Test(TestInfo {
                    id: test_id(block.file.as_str(), name),
                    label: name.to_owned(),
                    file: Some(block.file.clone()),
                    line: Some(block.start.line),
                    skipped: false,
                })
            })
            .collect();

        Some(build_file_tree(&last_block.file, self.work_dir, tests))
    }

    fn root(&self, file_trees: Vec<TestNode>) -> TestSuiteInfo {
        let file_count = file_trees.len();
        let mut children = Vec::new();
        merge(&mut children, file_trees);
        debug!(
            "merged {file_count} file trees into {} top-level nodes",
            children.len()
        );

        TestSuiteInfo::root(self.labels.root_label.clone(), children)
    }
}

/// Maps the results of a Jest run to a tree, using the default labels.
pub fn map_result_to_tree(
    response: &JestResponse,
    work_dir: &Utf8Path,
    reconciler: Option<&dyn StatusReconciler>,
) -> TestSuiteInfo {
    let mut mapper = TestTreeMapper::new(work_dir);
    if let Some(reconciler) = reconciler {
        mapper.set_reconciler(reconciler);
    }
    mapper.map_results(response)
}

/// Maps statically parsed test files to a tree, using the default labels.
pub fn map_parse_to_tree(parsed_files: &[ParseResult], work_dir: &Utf8Path) -> TestSuiteInfo {
    TestTreeMapper::new(work_dir).map_parse(parsed_files)
}

/// Returns the gutter decoration for an assertion: one if the reconciler knows its status, none
/// otherwise.
pub fn map_assertion_to_decorations(
    assertion: &JestAssertionResult,
    file: &Utf8Path,
    reconciler: Option<&dyn StatusReconciler>,
) -> Vec<TestDecoration> {
    assertion_status(assertion, file, reconciler)
        .map(|status| TestDecoration {
            line: status.line.unwrap_or(0),
            message: status.terse_message.clone().unwrap_or_default(),
        })
        .into_iter()
        .collect()
}
