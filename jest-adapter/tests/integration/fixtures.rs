// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use jest_adapter_metadata::{JestTotalResults, ParseResult, TestNode, TestSuiteInfo};

pub(crate) const WORK_DIR: &str = "/home/dev/shop";

fn fixture_path(relative: &str) -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../fixtures")
        .join(relative)
}

pub(crate) fn multi_file_results() -> JestTotalResults {
    let path = fixture_path("jest-results/multi-file.json");
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {path}: {err}"));
    JestTotalResults::parse_json(json).expect("fixture is valid Jest output")
}

pub(crate) fn shop_parse_results() -> Vec<ParseResult> {
    let path = fixture_path("parse-results/shop.json");
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {path}: {err}"));
    ParseResult::parse_json_list(json).expect("fixture is valid parse output")
}

/// Follows a path of labels down from `suite`, panicking if any step is missing or is a test.
pub(crate) fn descend<'a>(mut suite: &'a TestSuiteInfo, labels: &[&str]) -> &'a TestSuiteInfo {
    for label in labels {
        suite = suite
            .children
            .iter()
            .find(|child| child.label() == *label)
            .and_then(TestNode::as_suite)
            .unwrap_or_else(|| panic!("suite `{label}` not found under `{}`", suite.label));
    }
    suite
}

pub(crate) fn labels(suite: &TestSuiteInfo) -> Vec<&str> {
    suite.children.iter().map(TestNode::label).collect()
}
