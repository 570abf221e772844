// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use camino::Utf8Path;
use jest_adapter::{
    ids::{ROOT_ID, test_id},
    mapper::{TestTreeMapper, map_assertion_to_decorations, map_result_to_tree},
    reconciler::TestReconciler,
};
use jest_adapter_metadata::{
    JestAssertionResult, JestAssertionStatus, JestFileResult, JestResponse, JestTotalResults,
    TestDecoration, TestInfo,
};
use pretty_assertions::assert_eq;
use test_strategy::proptest;

#[test]
fn shared_directories_merge() {
    let response = JestResponse::from(multi_file_results());
    let root = map_result_to_tree(&response, Utf8Path::new(WORK_DIR), None);

    assert_eq!(root.id, ROOT_ID);
    assert_eq!(root.label, "Jest");
    assert_eq!(root.file, None);
    assert_eq!(labels(&root), vec!["src"]);
    assert_eq!(labels(descend(&root, &["src"])), vec!["cart", "user.test.ts"]);
    assert_eq!(
        labels(descend(&root, &["src", "cart"])),
        vec!["cart.test.ts", "price.test.ts"]
    );

    let cart_file = descend(&root, &["src", "cart", "cart.test.ts"]);
    assert_eq!(
        cart_file.file.as_deref(),
        Some(Utf8Path::new("/home/dev/shop/src/cart/cart.test.ts"))
    );
    assert_eq!(labels(cart_file), vec!["exports a factory", "Cart"]);
    assert_eq!(labels(descend(cart_file, &["Cart"])), vec!["totals", "items"]);
    assert_eq!(
        labels(descend(cart_file, &["Cart", "totals"])),
        vec!["sums line items", "applies discounts"]
    );

    assert_eq!(root.test_count(), 7);
}

#[test]
fn describe_suites_use_chain_ids() {
    let response = JestResponse::from(multi_file_results());
    let root = map_result_to_tree(&response, Utf8Path::new(WORK_DIR), None);

    let file = "/home/dev/shop/src/cart/cart.test.ts";
    let cart = descend(&root, &["src", "cart", "cart.test.ts", "Cart"]);
    assert_eq!(cart.id, test_id(file, "Cart"));
    assert_eq!(
        descend(cart, &["totals"]).id,
        test_id(file, "Cart totals")
    );
}

#[test]
fn statuses_resolved_through_reconciler() {
    let results = multi_file_results();
    let mut reconciler = TestReconciler::new();
    reconciler.update_file_with_jest_status(&results);

    let mut mapper = TestTreeMapper::new(Utf8Path::new(WORK_DIR));
    mapper.set_reconciler(&reconciler);
    let root = mapper.map_results(&JestResponse::from(results));

    let cart = descend(&root, &["src", "cart", "cart.test.ts", "Cart"]);
    let test = |suite: &str, label: &str| -> TestInfo {
        descend(cart, &[suite])
            .children
            .iter()
            .find(|child| child.label() == label)
            .and_then(|child| child.as_test())
            .cloned()
            .unwrap_or_else(|| panic!("test `{label}` not found"))
    };

    let passed = test("totals", "sums line items");
    assert_eq!((passed.line, passed.skipped), (Some(6), false));

    // Failures point at the failing frame rather than the test's declaration.
    let failed = test("totals", "applies discounts");
    assert_eq!((failed.line, failed.skipped), (Some(14), false));

    let pending = test("items", "removes an item");
    assert_eq!((pending.line, pending.skipped), (Some(20), true));
}

#[test]
fn decorations_from_fixture() {
    let results = multi_file_results();
    let mut reconciler = TestReconciler::new();
    reconciler.update_file_with_jest_status(&results);

    let file = &results.test_results[0];
    let decorations: Vec<_> = file
        .assertion_results
        .iter()
        .map(|assertion| map_assertion_to_decorations(assertion, &file.name, Some(&reconciler)))
        .collect();

    assert_eq!(decorations.len(), 4);
    assert!(decorations.iter().all(|d| d.len() == 1));
    assert_eq!(
        decorations[1],
        vec![TestDecoration {
            line: 14,
            message: "Error: expect(received).toBe(expected)".to_owned(),
        }]
    );
}

fn flat_results(file_count: usize, assertion_count: usize) -> JestTotalResults {
    let test_results = (0..file_count)
        .map(|file| JestFileResult {
            name: format!("/work/file{file}.test.ts").into(),
            status: Some("passed".to_owned()),
            message: None,
            assertion_results: (0..assertion_count)
                .map(|assertion| JestAssertionResult {
                    title: format!("test {assertion}"),
                    full_name: format!("test {assertion}"),
                    ancestor_titles: Vec::new(),
                    status: JestAssertionStatus::Passed,
                    failure_messages: Vec::new(),
                    location: None,
                })
                .collect(),
        })
        .collect();

    JestTotalResults {
        test_results,
        ..Default::default()
    }
}

#[proptest]
fn flat_files_round_trip(#[strategy(1usize..8)] file_count: usize, #[strategy(0usize..8)] assertion_count: usize) {
    let response = JestResponse::from(flat_results(file_count, assertion_count));
    let root = map_result_to_tree(&response, Utf8Path::new("/work"), None);

    assert_eq!(root.children.len(), file_count);
    for child in &root.children {
        let file = child.as_suite().expect("file suite");
        assert_eq!(file.children.len(), assertion_count);
        assert!(file.children.iter().all(|node| node.as_test().is_some()));
    }
}

#[test]
fn files_in_shared_directory_collapse_into_one_child() {
    let mut results = flat_results(3, 2);
    for file in &mut results.test_results {
        file.name = Utf8Path::new("/work/shared").join(file.name.file_name().expect("has a name"));
    }

    let root = map_result_to_tree(&JestResponse::from(results), Utf8Path::new("/work"), None);
    assert_eq!(labels(&root), vec!["shared"]);
    assert_eq!(descend(&root, &["shared"]).children.len(), 3);
    assert_eq!(root.test_count(), 6);
}
