// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use jest_adapter::ids::{full_test_id, parse_ids_to_filter};
use jest_adapter_metadata::TestFilter;
use pretty_assertions::assert_eq;

#[test]
fn selecting_root_runs_everything() {
    assert_eq!(parse_ids_to_filter(["root"]), None);
}

#[test]
fn selecting_tests_across_files() {
    let results = multi_file_results();
    let ids: Vec<_> = results
        .test_results
        .iter()
        .flat_map(|file| {
            file.assertion_results
                .iter()
                .filter(|assertion| assertion.ancestor_titles.len() == 1)
                .map(|assertion| full_test_id(assertion, file.name.as_str()))
        })
        .collect();

    assert_eq!(
        ids,
        vec![
            "/home/dev/shop/src/user.test.ts~~User##has a name",
            "/home/dev/shop/src/user.test.ts~~User##has an email",
        ]
    );
    assert_eq!(
        parse_ids_to_filter(&ids),
        Some(TestFilter {
            test_file_name_pattern: r"(/home/dev/shop/src/user\.test\.ts)".to_owned(),
            test_name_pattern: Some("(has a name|has an email)".to_owned()),
        })
    );
}

#[test]
fn selecting_a_directory_suite() {
    let filter = parse_ids_to_filter(["cart"]).expect("not root");
    assert_eq!(filter.test_file_name_pattern, "(cart)");
    assert_eq!(filter.test_name_pattern, None);
}
