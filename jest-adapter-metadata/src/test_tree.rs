// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A node in the tree shown by a test explorer.
///
/// Suites (directories, files and `describe` blocks) own their children; tests are always leaves.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TestNode {
    /// A directory, file or `describe` block.
    Suite(TestSuiteInfo),

    /// A single test case.
    Test(TestInfo),
}

impl TestNode {
    /// Returns the identifier of this node.
    pub fn id(&self) -> &str {
        match self {
            Self::Suite(suite) => &suite.id,
            Self::Test(test) => &test.id,
        }
    }

    /// Returns the display label of this node.
    pub fn label(&self) -> &str {
        match self {
            Self::Suite(suite) => &suite.label,
            Self::Test(test) => &test.label,
        }
    }

    /// Returns the source file associated with this node, if any.
    pub fn file(&self) -> Option<&Utf8Path> {
        match self {
            Self::Suite(suite) => suite.file.as_deref(),
            Self::Test(test) => test.file.as_deref(),
        }
    }

    /// Returns the suite, if this node is one.
    pub fn as_suite(&self) -> Option<&TestSuiteInfo> {
        match self {
            Self::Suite(suite) => Some(suite),
            Self::Test(_) => None,
        }
    }

    /// Returns the test, if this node is one.
    pub fn as_test(&self) -> Option<&TestInfo> {
        match self {
            Self::Suite(_) => None,
            Self::Test(test) => Some(test),
        }
    }

    /// Returns the number of test leaves at or below this node.
    pub fn test_count(&self) -> usize {
        match self {
            Self::Suite(suite) => suite.test_count(),
            Self::Test(_) => 1,
        }
    }
}

impl From<TestSuiteInfo> for TestNode {
    fn from(suite: TestSuiteInfo) -> Self {
        Self::Suite(suite)
    }
}

impl From<TestInfo> for TestNode {
    fn from(test: TestInfo) -> Self {
        Self::Test(test)
    }
}

/// A grouping node: a directory, a test file, or a `describe` block.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct TestSuiteInfo {
    /// The identifier, unique among merged siblings.
    pub id: String,

    /// The display label.
    pub label: String,

    /// The source file, for file and `describe` suites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Utf8PathBuf>,

    /// Children in first-seen order.
    #[serde(default)]
    pub children: Vec<TestNode>,
}

impl TestSuiteInfo {
    /// The identifier of the synthetic root suite.
    pub const ROOT_ID: &'static str = "root";

    /// Creates a new suite without a source file.
    pub fn new(id: impl Into<String>, label: impl Into<String>, children: Vec<TestNode>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            file: None,
            children,
        }
    }

    /// Creates the synthetic root suite that every mapped tree hangs off.
    pub fn root(label: impl Into<String>, children: Vec<TestNode>) -> Self {
        Self::new(Self::ROOT_ID, label, children)
    }

    /// Sets the source file for this suite.
    pub fn with_file(mut self, file: impl Into<Utf8PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Returns the direct child with the given identifier, if any.
    pub fn child(&self, id: &str) -> Option<&TestNode> {
        self.children.iter().find(|child| child.id() == id)
    }

    /// Returns the number of test leaves below this suite.
    pub fn test_count(&self) -> usize {
        self.children.iter().map(TestNode::test_count).sum()
    }
}

/// A single test case.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct TestInfo {
    /// The identifier.
    pub id: String,

    /// The display label: the raw test title.
    pub label: String,

    /// The source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Utf8PathBuf>,

    /// The source line, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Whether the test is known to be skipped.
    #[serde(default)]
    pub skipped: bool,
}
