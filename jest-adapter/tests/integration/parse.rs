// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use camino::Utf8Path;
use jest_adapter::{
    ids::test_id,
    mapper::{map_parse_to_tree, map_result_to_tree},
};
use jest_adapter_metadata::JestResponse;
use pretty_assertions::assert_eq;

#[test]
fn parse_results_map_to_flat_tests() {
    let root = map_parse_to_tree(&shop_parse_results(), Utf8Path::new(WORK_DIR));

    assert_eq!(labels(&root), vec!["src"]);
    // helpers.ts has no test blocks, so neither it nor an empty suite for it shows up.
    assert_eq!(labels(descend(&root, &["src"])), vec!["cart", "user.test.ts"]);
    assert_eq!(labels(descend(&root, &["src", "cart"])), vec!["cart.test.ts"]);

    let cart_file = descend(&root, &["src", "cart", "cart.test.ts"]);
    assert_eq!(labels(cart_file), vec!["sums line items", "test has no name"]);

    let unnamed = cart_file.children[1].as_test().expect("flat test");
    assert_eq!(
        unnamed.id,
        test_id("/home/dev/shop/src/cart/cart.test.ts", "test has no name")
    );
    assert_eq!(unnamed.line, Some(11));
    assert!(!unnamed.skipped);
}

#[test]
fn parse_and_result_trees_share_test_ids() {
    let parsed = map_parse_to_tree(&shop_parse_results(), Utf8Path::new(WORK_DIR));
    let results = map_result_to_tree(
        &JestResponse::from(multi_file_results()),
        Utf8Path::new(WORK_DIR),
        None,
    );

    let parsed_test = &descend(&parsed, &["src", "user.test.ts"]).children[0];
    let result_test = &descend(&results, &["src", "user.test.ts", "User"]).children[0];
    assert_eq!(parsed_test.id(), result_test.id());
}
