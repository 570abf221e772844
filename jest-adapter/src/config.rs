// Copyright (c) The jest-adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for jest-adapter.

use crate::errors::{ConfigParseError, ConfigParseErrorKind};
use camino::Utf8Path;
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use tracing::debug;

/// Configuration for jest-adapter.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AdapterConfig {
    tree: TreeLabels,
}

impl AdapterConfig {
    /// The location of the repository config, relative to the work dir.
    pub const CONFIG_PATH: &'static str = ".config/jest-adapter.toml";

    /// Contains the default config as a TOML file.
    ///
    /// ```toml
    #[doc = include_str!("../default-config.toml")]
    /// ```
    ///
    /// Repository-specific configuration is layered on top of the default config.
    pub const DEFAULT_CONFIG: &'static str = include_str!("../default-config.toml");

    /// Reads the config from `config_file`, or if not specified from `.config/jest-adapter.toml`
    /// within `work_dir`.
    ///
    /// An explicitly specified file must exist. Without one, and without a config in the work dir,
    /// the defaults are used.
    pub fn from_sources(
        work_dir: &Utf8Path,
        config_file: Option<&Utf8Path>,
    ) -> Result<Self, ConfigParseError> {
        let (config_file, source) = match config_file {
            Some(file) => (
                file.to_owned(),
                File::new(file.as_str(), FileFormat::Toml),
            ),
            None => {
                let config_file = work_dir.join(Self::CONFIG_PATH);
                let source = File::new(config_file.as_str(), FileFormat::Toml).required(false);
                (config_file, source)
            }
        };
        debug!("reading config from {config_file}, layered over the default config");

        let config: Self = Self::make_default_config()
            .add_source(source)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|err| {
                ConfigParseError::new(&config_file, ConfigParseErrorKind::BuildError(Box::new(err)))
            })?;
        config
            .validate()
            .map_err(|kind| ConfigParseError::new(&config_file, kind))?;

        Ok(config)
    }

    /// Returns the labels used when building trees.
    pub fn tree_labels(&self) -> &TreeLabels {
        &self.tree
    }

    fn make_default_config() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(Self::DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn validate(&self) -> Result<(), ConfigParseErrorKind> {
        if self.tree.root_label.is_empty() {
            return Err(ConfigParseErrorKind::EmptyLabel {
                key: "tree.root-label",
            });
        }
        if self.tree.unnamed_test_label.is_empty() {
            return Err(ConfigParseErrorKind::EmptyLabel {
                key: "tree.unnamed-test-label",
            });
        }
        Ok(())
    }
}

/// Labels for nodes that don't get their label from Jest.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct TreeLabels {
    /// The label of the synthetic root suite.
    pub root_label: String,

    /// The label for parsed tests without a name.
    pub unnamed_test_label: String,
}

impl Default for TreeLabels {
    fn default() -> Self {
        Self {
            root_label: "Jest".to_owned(),
            unnamed_test_label: "test has no name".to_owned(),
        }
    }
}
