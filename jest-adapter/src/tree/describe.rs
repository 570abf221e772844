// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::build_file_tree;
use crate::{
    ids::test_id,
    reconciler::{StatusReconciler, TestReconciliationState, assertion_status},
};
use camino::Utf8Path;
use jest_adapter_metadata::{
    JestAssertionResult, JestFileResult, TestInfo, TestNode, TestSuiteInfo,
};
use tracing::trace;

/// Builds the tree for a single test file: directory suites, the file suite, and below it the
/// file's tests grouped by their `describe` chains.
///
/// Tests outside any `describe` block come first, followed by the `describe` suites in the order
/// they were first seen.
pub fn build_file_result_tree(
    file_result: &JestFileResult,
    work_dir: &Utf8Path,
    reconciler: Option<&dyn StatusReconciler>,
) -> TestSuiteInfo {
    let (grouped, ungrouped): (Vec<_>, Vec<_>) = file_result
        .assertion_results
        .iter()
        .partition(|assertion| !assertion.ancestor_titles.is_empty());

    let mut describe_suites = Vec::new();
    for assertion in grouped {
        let parent = find_or_create_chain(&mut describe_suites, &file_result.name, assertion);
        parent.push(TestNode::Test(build_test_node(
            assertion,
            file_result,
            reconciler,
        )));
    }

    let mut children: Vec<_> = ungrouped
        .into_iter()
        .map(|assertion| TestNode::Test(build_test_node(assertion, file_result, reconciler)))
        .collect();
    children.extend(describe_suites);

    build_file_tree(&file_result.name, work_dir, children)
}

/// Builds the node for one test.
///
/// Without a reconciler, or if the reconciler has nothing recorded for this test, the line is
/// unknown and the test isn't marked as skipped.
pub fn build_test_node(
    assertion: &JestAssertionResult,
    file_result: &JestFileResult,
    reconciler: Option<&dyn StatusReconciler>,
) -> TestInfo {
    let (line, skipped) = match assertion_status(assertion, &file_result.name, reconciler) {
        Some(status) => (
            status.line,
            status.status == TestReconciliationState::KnownSkip,
        ),
        None => (None, false),
    };

    TestInfo {
        id: test_id(file_result.name.as_str(), &assertion.title),
        label: assertion.title.clone(),
        file: Some(file_result.name.clone()),
        line,
        skipped,
    }
}

/// Walks the `describe` chain of `assertion` down from `level`, creating suites that don't exist
/// yet, and returns the children of the innermost one.
fn find_or_create_chain<'a>(
    mut level: &'a mut Vec<TestNode>,
    file: &Utf8Path,
    assertion: &JestAssertionResult,
) -> &'a mut Vec<TestNode> {
    for (depth, title) in assertion.ancestor_titles.iter().enumerate() {
        let chain = assertion.ancestor_titles[..=depth].join(" ");
        level = find_or_create_suite(level, test_id(file.as_str(), &chain), title, file);
    }
    level
}

fn find_or_create_suite<'a>(
    level: &'a mut Vec<TestNode>,
    id: String,
    label: &str,
    file: &Utf8Path,
) -> &'a mut Vec<TestNode> {
    // Only suites are candidates: a test may share an identifier with a describe chain, e.g. a
    // test named "a b" inside `describe("a")` next to `describe("a", () => describe("b"))`.
    let index = level
        .iter()
        .position(|node| matches!(node, TestNode::Suite(suite) if suite.id == id));
    let index = match index {
        Some(index) => index,
        None => {
            trace!("creating describe suite `{id}`");
            level.push(TestNode::Suite(
                TestSuiteInfo::new(id, label, Vec::new()).with_file(file),
            ));
            level.len() - 1
        }
    };

    match &mut level[index] {
        TestNode::Suite(suite) => &mut suite.children,
        TestNode::Test(_) => unreachable!("index always points at a suite"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciler::TestReconciler;
    use jest_adapter_metadata::{JestAssertionStatus, JestTotalResults, Location};
    use pretty_assertions::assert_eq;

    const FILE: &str = "/repo/src/a.test.ts";

    fn assertion(path: &str) -> JestAssertionResult {
        let mut parts: Vec<&str> = path.split(" > ").collect();
        let title = parts.pop().expect("at least one part");
        JestAssertionResult {
            title: title.to_owned(),
            full_name: path.replace(" > ", " "),
            ancestor_titles: parts.into_iter().map(str::to_owned).collect(),
            status: JestAssertionStatus::Passed,
            failure_messages: Vec::new(),
            location: None,
        }
    }

    fn file_result(paths: &[&str]) -> JestFileResult {
        JestFileResult {
            name: FILE.into(),
            status: Some("passed".to_owned()),
            message: None,
            assertion_results: paths.iter().map(|path| assertion(path)).collect(),
        }
    }

    fn file_suite(tree: &TestSuiteInfo) -> &TestSuiteInfo {
        assert_eq!(tree.id, "src");
        tree.as_suite_child("a.test.ts")
    }

    trait SuiteExt {
        fn as_suite_child(&self, id: &str) -> &TestSuiteInfo;
        fn labels(&self) -> Vec<&str>;
    }

    impl SuiteExt for TestSuiteInfo {
        fn as_suite_child(&self, id: &str) -> &TestSuiteInfo {
            self.child(id)
                .and_then(TestNode::as_suite)
                .unwrap_or_else(|| panic!("suite child `{id}` missing from `{}`", self.id))
        }

        fn labels(&self) -> Vec<&str> {
            self.children.iter().map(TestNode::label).collect()
        }
    }

    #[test]
    fn groups_by_describe_chain() {
        let result = file_result(&["A > B > t1", "A > B > t2", "A > C > t3"]);
        let tree = build_file_result_tree(&result, Utf8Path::new("/repo"), None);

        let file = file_suite(&tree);
        assert_eq!(file.labels(), vec!["A"]);

        let a = file.as_suite_child(&test_id(FILE, "A"));
        assert_eq!(a.labels(), vec!["B", "C"]);
        assert_eq!(a.file.as_deref(), Some(Utf8Path::new(FILE)));

        let b = a.as_suite_child(&test_id(FILE, "A B"));
        assert_eq!(b.labels(), vec!["t1", "t2"]);
        let c = a.as_suite_child(&test_id(FILE, "A C"));
        assert_eq!(c.labels(), vec!["t3"]);
        assert_eq!(c.children[0].id(), test_id(FILE, "t3"));
    }

    #[test]
    fn ungrouped_tests_come_first() {
        let result = file_result(&["A > t1", "top", "A > t2", "other"]);
        let tree = build_file_result_tree(&result, Utf8Path::new("/repo"), None);

        let file = file_suite(&tree);
        assert_eq!(file.labels(), vec!["top", "other", "A"]);
        assert_eq!(file.file.as_deref(), Some(Utf8Path::new(FILE)));
        assert_eq!(tree.test_count(), 4);
    }

    #[test]
    fn test_sharing_id_with_describe_chain() {
        let result = file_result(&["a > a b", "a > b > t"]);
        let tree = build_file_result_tree(&result, Utf8Path::new("/repo"), None);

        let a = file_suite(&tree).as_suite_child(&test_id(FILE, "a"));
        assert_eq!(a.labels(), vec!["a b", "b"]);
        assert!(a.children[0].as_test().is_some());
        assert!(a.children[1].as_suite().is_some());
    }

    #[test]
    fn duplicate_titles_stay_siblings() {
        let result = file_result(&["A > same", "A > same"]);
        let tree = build_file_result_tree(&result, Utf8Path::new("/repo"), None);

        let a = file_suite(&tree).as_suite_child(&test_id(FILE, "A"));
        assert_eq!(a.labels(), vec!["same", "same"]);
        assert_eq!(a.children[0].id(), a.children[1].id());
    }

    #[test]
    fn test_node_without_reconciler() {
        let result = file_result(&["t"]);
        let node = build_test_node(&result.assertion_results[0], &result, None);
        assert_eq!(
            node,
            TestInfo {
                id: test_id(FILE, "t"),
                label: "t".to_owned(),
                file: Some(FILE.into()),
                line: None,
                skipped: false,
            }
        );
    }

    #[test]
    fn test_node_with_reconciler() {
        let mut recorded = file_result(&["skipped one", "ran"]);
        recorded.assertion_results[0].status = JestAssertionStatus::Pending;
        recorded.assertion_results[0].location = Some(Location { line: 7, column: 3 });
        recorded.assertion_results[1].location = Some(Location { line: 11, column: 3 });

        let mut reconciler = TestReconciler::new();
        reconciler.update_file_with_jest_status(&JestTotalResults {
            test_results: vec![recorded.clone()],
            ..Default::default()
        });

        let skipped = build_test_node(&recorded.assertion_results[0], &recorded, Some(&reconciler));
        assert_eq!(skipped.line, Some(7));
        assert!(skipped.skipped);

        let ran = build_test_node(&recorded.assertion_results[1], &recorded, Some(&reconciler));
        assert_eq!(ran.line, Some(11));
        assert!(!ran.skipped);
    }
}
