// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
#[doc(hidden)]
pub use output::OutputWriter;
