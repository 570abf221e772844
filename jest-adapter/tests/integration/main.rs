// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod fixtures;
mod parse;
mod results;
mod selection;
