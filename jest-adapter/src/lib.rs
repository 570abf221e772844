// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Core functionality for the Jest test explorer adapter.
//!
//! This crate turns the output of a Jest run (or of statically parsing test files) into the
//! suite/test tree a test explorer UI displays, and turns a selection made in that UI back into
//! a filter that Jest understands.
//!
//! The main entry points are [`mapper::TestTreeMapper`] and [`ids::parse_ids_to_filter`].

pub mod config;
pub mod errors;
pub mod ids;
pub mod mapper;
pub mod reconciler;
pub mod tree;
