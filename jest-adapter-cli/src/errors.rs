// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::NO_HEADING_TARGET;
use camino::Utf8PathBuf;
use jest_adapter::errors::ConfigParseError;
use jest_adapter_metadata::JestAdapterExitCode;
use owo_colors::{OwoColorize, Stream};
use std::error::Error;
use thiserror::Error;

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

// The #[error()] strings are placeholders: errors are printed with display_to_stderr, which
// colorizes them.

/// An error the adapter anticipates, reported without a backtrace.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("could not determine the current directory")]
    CurrentDirFailed {
        #[source]
        err: std::io::Error,
    },
    #[error("work directory is not valid UTF-8")]
    WorkDirInvalidUtf8 { work_dir: std::path::PathBuf },
    #[error("config parse error")]
    ConfigParseError {
        #[from]
        err: ConfigParseError,
    },
    #[error("failed to read input")]
    InputReadError {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to parse input")]
    InputParseError {
        path: Utf8PathBuf,
        #[source]
        err: serde_json::Error,
    },
    #[error("failed to write output")]
    WriteOutputError {
        #[source]
        err: std::io::Error,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::CurrentDirFailed { .. }
            | Self::WorkDirInvalidUtf8 { .. }
            | Self::ConfigParseError { .. } => JestAdapterExitCode::SETUP_ERROR,
            Self::InputReadError { .. } | Self::InputParseError { .. } => {
                JestAdapterExitCode::INPUT_READ_FAILED
            }
            Self::WriteOutputError { .. } => JestAdapterExitCode::WRITE_OUTPUT_ERROR,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self) {
        let mut next_error = match self {
            Self::CurrentDirFailed { err } => {
                tracing::error!("could not determine the current directory");
                Some(err as &dyn Error)
            }
            Self::WorkDirInvalidUtf8 { work_dir } => {
                tracing::error!(
                    "work directory `{}` is not valid UTF-8",
                    work_dir
                        .display()
                        .if_supports_color(Stream::Stderr, |x| x.bold())
                );
                None
            }
            Self::ConfigParseError { err } => {
                tracing::error!(
                    "failed to parse config at `{}`",
                    err.config_file()
                        .if_supports_color(Stream::Stderr, |x| x.bold())
                );
                Some(err.kind() as &dyn Error)
            }
            Self::InputReadError { path, err } => {
                tracing::error!(
                    "failed to read `{}`",
                    path.if_supports_color(Stream::Stderr, |x| x.bold())
                );
                Some(err as &dyn Error)
            }
            Self::InputParseError { path, err } => {
                tracing::error!(
                    "failed to parse JSON in `{}`",
                    path.if_supports_color(Stream::Stderr, |x| x.bold())
                );
                Some(err as &dyn Error)
            }
            Self::WriteOutputError { err } => {
                tracing::error!("failed to write output");
                Some(err as &dyn Error)
            }
        };

        while let Some(err) = next_error {
            tracing::error!(target: NO_HEADING_TARGET, "\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}
