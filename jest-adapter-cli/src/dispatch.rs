// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Top-level application and command routing.

use crate::{
    ExpectedError,
    errors::Result,
    output::{OutputContext, OutputOpts, OutputWriter},
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use jest_adapter::{
    config::AdapterConfig, ids::parse_ids_to_filter, mapper::map_assertion_to_decorations,
    mapper::TestTreeMapper, reconciler::TestReconciler,
};
use jest_adapter_metadata::{
    JestAdapterExitCode, JestResponse, JestTotalResults, ParseResult, TestDecoration, TestNode,
};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Maps Jest output to test explorer trees, and explorer selections back to Jest filters.
#[derive(Debug, Parser)]
#[command(
    version,
    bin_name = "jest-adapter",
    styles = crate::output::clap_styles::style(),
    max_term_width = 100,
)]
pub struct JestAdapterApp {
    #[clap(flatten)]
    output: OutputOpts,

    #[clap(flatten)]
    common: CommonOpts,

    #[clap(subcommand)]
    command: Command,
}

impl JestAdapterApp {
    /// Initializes the output context.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app.
    ///
    /// Returns the exit code.
    pub fn exec(self, output: OutputContext, output_writer: &mut OutputWriter) -> Result<i32> {
        debug!(
            "running with verbose: {}, color: {:?}",
            output.verbose, output.color
        );

        match self.command {
            Command::Tree {
                results,
                with_status,
            } => {
                let work_dir = self.common.work_dir()?;
                let config = self.common.config(&work_dir)?;
                let results: JestTotalResults = read_json(&results)?;

                let mut reconciler = TestReconciler::new();
                let mut mapper = TestTreeMapper::new(&work_dir);
                mapper.set_labels(config.tree_labels().clone());
                if with_status {
                    reconciler.update_file_with_jest_status(&results);
                    mapper.set_reconciler(&reconciler);
                }

                let root = mapper.map_results(&JestResponse::from(results));
                write_json(&TestNode::from(root), output_writer)?;
            }
            Command::Parse { input } => {
                let work_dir = self.common.work_dir()?;
                let config = self.common.config(&work_dir)?;
                let parsed: Vec<ParseResult> = read_json(&input)?;

                let root = TestTreeMapper::new(&work_dir)
                    .set_labels(config.tree_labels().clone())
                    .map_parse(&parsed);
                write_json(&TestNode::from(root), output_writer)?;
            }
            Command::Filter { ids } => {
                write_json(&parse_ids_to_filter(&ids), output_writer)?;
            }
            Command::Decorations { results, file } => {
                let work_dir = self.common.work_dir()?;
                let results: JestTotalResults = read_json(&results)?;
                let file = if file.is_absolute() {
                    file
                } else {
                    work_dir.join(file)
                };

                let mut reconciler = TestReconciler::new();
                reconciler.update_file_with_jest_status(&results);

                let decorations: Vec<TestDecoration> = results
                    .test_results
                    .iter()
                    .filter(|file_result| file_result.name == file)
                    .flat_map(|file_result| {
                        file_result.assertion_results.iter().flat_map(|assertion| {
                            map_assertion_to_decorations(
                                assertion,
                                &file_result.name,
                                Some(&reconciler),
                            )
                        })
                    })
                    .collect();
                if decorations.is_empty() {
                    debug!("no decorations for {file}");
                }
                write_json(&decorations, output_writer)?;
            }
        }

        Ok(JestAdapterExitCode::OK)
    }
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Global options")]
struct CommonOpts {
    /// Directory that test file paths are relative to [default: current directory]
    #[arg(long, global = true, value_name = "DIR", env = "JEST_ADAPTER_WORK_DIR")]
    work_dir: Option<Utf8PathBuf>,

    /// Config file [default: <work-dir>/.config/jest-adapter.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config_file: Option<Utf8PathBuf>,
}

impl CommonOpts {
    fn work_dir(&self) -> Result<Utf8PathBuf> {
        match &self.work_dir {
            Some(work_dir) => Ok(work_dir.clone()),
            None => {
                let current_dir = std::env::current_dir()
                    .map_err(|err| ExpectedError::CurrentDirFailed { err })?;
                Utf8PathBuf::try_from(current_dir).map_err(|err| {
                    ExpectedError::WorkDirInvalidUtf8 {
                        work_dir: err.into_path_buf(),
                    }
                })
            }
        }
    }

    fn config(&self, work_dir: &Utf8Path) -> Result<AdapterConfig> {
        Ok(AdapterConfig::from_sources(
            work_dir,
            self.config_file.as_deref(),
        )?)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Map the output of `jest --json` to a test tree
    Tree {
        /// Path to the JSON written by `jest --json`
        #[arg(long, value_name = "PATH")]
        results: Utf8PathBuf,

        /// Resolve line numbers and skip flags from the statuses in the results
        #[arg(long)]
        with_status: bool,
    },
    /// Map statically parsed test files to a test tree
    Parse {
        /// Path to a JSON list of parsed test files
        #[arg(long, value_name = "PATH")]
        input: Utf8PathBuf,
    },
    /// Turn selected tree ids into a Jest filter
    ///
    /// Prints `null` when the root is selected, meaning no filter.
    Filter {
        /// Selected ids, in selection order
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Print the gutter decorations for one test file
    Decorations {
        /// Path to the JSON written by `jest --json`
        #[arg(long, value_name = "PATH")]
        results: Utf8PathBuf,

        /// Test file to decorate, relative to the work dir or absolute
        #[arg(long, value_name = "PATH")]
        file: Utf8PathBuf,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let json = std::fs::read_to_string(path).map_err(|err| ExpectedError::InputReadError {
        path: path.to_owned(),
        err,
    })?;
    serde_json::from_str(&json).map_err(|err| ExpectedError::InputParseError {
        path: path.to_owned(),
        err,
    })
}

fn write_json<T: Serialize + ?Sized>(value: &T, output_writer: &mut OutputWriter) -> Result<()> {
    let mut writer = output_writer.stdout_writer();
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(std::io::Error::from)
        .and_then(|()| writeln!(writer))
        .and_then(|()| writer.flush())
        .map_err(|err| ExpectedError::WriteOutputError { err })
}
