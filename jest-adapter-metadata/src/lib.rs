// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Structured access to the data exchanged by the Jest test explorer adapter.
//!
//! This crate contains three groups of types:
//!
//! * The input produced by Jest: [`JestTotalResults`] (the output of `jest --json`) and
//!   [`ParseResult`] (static parse output describing `it` blocks in a file).
//! * The output consumed by a test explorer UI: [`TestNode`] trees, [`TestDecoration`]s and
//!   [`TestFilter`]s.
//! * Documented exit codes for the `jest-adapter` binary: [`JestAdapterExitCode`].
//!
//! The core tree-building logic lives in the `jest-adapter` crate.

mod exit_codes;
mod jest_results;
mod parse_results;
mod test_filter;
mod test_tree;

pub use exit_codes::*;
pub use jest_results::*;
pub use parse_results::*;
pub use test_filter::*;
pub use test_tree::*;
