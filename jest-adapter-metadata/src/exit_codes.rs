// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for `jest-adapter` failures.
///
/// `jest-adapter` invocations may fail for a variety of reasons. This structure documents the exit
/// codes that may occur in case of expected failures.
///
/// Unknown/unexpected failures will always result in exit code 1.
pub enum JestAdapterExitCode {}

impl JestAdapterExitCode {
    /// No errors occurred and the adapter exited normally.
    pub const OK: i32 = 0;

    /// An input file (Jest results or parse results) could not be read or deserialized.
    pub const INPUT_READ_FAILED: i32 = 103;

    /// Writing data to stdout or stderr produced an error.
    pub const WRITE_OUTPUT_ERROR: i32 = 110;

    /// A user issue happened while setting up an invocation, such as an invalid config file.
    pub const SETUP_ERROR: i32 = 96;
}
