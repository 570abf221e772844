// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use jest_adapter_metadata::TestNode;
use tracing::trace;

/// Merges `source` into `destination` by identifier.
///
/// A source suite whose identifier matches a suite already in `destination` has its children
/// merged recursively into the existing suite. Everything else is appended, so the first node
/// with a given identifier keeps its position. Tests are never merged into each other: two tests
/// with the same identifier both end up as siblings.
pub fn merge(destination: &mut Vec<TestNode>, source: Vec<TestNode>) {
    for node in source {
        let index = destination
            .iter()
            .position(|existing| existing.id() == node.id());

        match (index, node) {
            (Some(index), TestNode::Suite(suite)) if destination[index].as_suite().is_some() => {
                trace!("merging suite `{}` into existing suite", suite.id);
                if let TestNode::Suite(existing) = &mut destination[index] {
                    merge(&mut existing.children, suite.children);
                }
            }
            (_, node) => destination.push(node),
        }
    }
}
