// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8Path;
use jest_adapter_metadata::{TestNode, TestSuiteInfo};
use regex::RegexBuilder;
use std::borrow::Cow;
use tracing::warn;

/// Wraps the nodes for a test file in one suite per directory between `work_dir` and the file.
///
/// The innermost suite is the file itself: identified and labeled by the file name, carrying
/// `leaf_children` and the file path. Directory suites use the raw directory name as both
/// identifier and label. Directories with the same name in different files get the same
/// identifier, which is what lets [`merge`](super::merge) coalesce them.
///
/// If the file sits directly in `work_dir`, the file suite is returned unwrapped.
pub fn build_file_tree(
    file_path: &Utf8Path,
    work_dir: &Utf8Path,
    leaf_children: Vec<TestNode>,
) -> TestSuiteInfo {
    let separator = if file_path.as_str().contains('/') {
        '/'
    } else {
        '\\'
    };
    let relative = strip_work_dir(file_path.as_str(), work_dir.as_str());

    let mut segments: Vec<&str> = relative.split(separator).collect();
    // split always yields at least one segment.
    let file_name = segments.pop().unwrap_or_default();

    let file_suite =
        TestSuiteInfo::new(file_name, file_name, leaf_children).with_file(file_path);

    segments
        .into_iter()
        .rev()
        .filter(|segment| !segment.is_empty())
        .fold(file_suite, |inner, directory| {
            TestSuiteInfo::new(directory, directory, vec![TestNode::Suite(inner)])
        })
}

/// Removes every occurrence of `work_dir` from `file_path`, ignoring case.
fn strip_work_dir<'a>(file_path: &'a str, work_dir: &str) -> Cow<'a, str> {
    if work_dir.is_empty() {
        return Cow::Borrowed(file_path);
    }

    match RegexBuilder::new(&regex::escape(work_dir))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(file_path, ""),
        Err(err) => {
            warn!("falling back to case-sensitive match for work dir `{work_dir}`: {err}");
            Cow::Owned(file_path.replace(work_dir, ""))
        }
    }
}
