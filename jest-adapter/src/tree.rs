// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Building blocks for test explorer trees.
//!
//! A file's tree is built in two steps: [`build_file_result_tree`] groups the file's tests by
//! their `describe` chains, then [`build_file_tree`] wraps them in suites for the file and each
//! directory above it. Trees for separate files are combined with [`merge`], which collapses
//! suites that share an identifier.

mod describe;
mod directory;
mod merge;

pub use describe::{build_file_result_tree, build_test_node};
pub use directory::build_file_tree;
pub use merge::merge;
