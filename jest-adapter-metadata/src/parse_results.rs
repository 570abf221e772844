// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::Location;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// The result of statically parsing a single test file, before any tests have run.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// The path of the parsed file.
    pub file: Utf8PathBuf,

    /// The `it`/`test` blocks discovered in the file, in source order.
    #[serde(default)]
    pub it_blocks: Vec<ItBlock>,
}

impl ParseResult {
    /// Parses a list of parse results from a JSON string.
    pub fn parse_json_list(json: impl AsRef<str>) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

/// An `it` or `test` block found by static parsing.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItBlock {
    /// The name of the block. Absent if the name isn't a string literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The file the block was found in.
    pub file: Utf8PathBuf,

    /// Where the block starts.
    pub start: Location,

    /// Where the block ends, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Location>,
}
