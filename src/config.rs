//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file,
//! then `DIRTREE__*` environment overrides. An explicit file passed on the
//! command line replaces the global file.

use crate::error::AppError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirTreeConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// How trees are printed
    #[serde(default)]
    pub output: OutputConfig,
}

/// Tree output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// text or json
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            pretty: false,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            )),
        }
    }
}

impl DirTreeConfig {
    /// Validate the entire configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            self.logging.validate().map_err(|e| format!("logging: {}", e)),
            self.output.validate().map_err(|e| format!("output: {}", e)),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads [`DirTreeConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global config file, then environment
    pub fn load() -> Result<DirTreeConfig, AppError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        Self::finish(builder.add_source(merge::merge_policy::environment()))
    }

    /// Defaults, the given file (required), then environment
    pub fn load_from_file(path: &Path) -> Result<DirTreeConfig, AppError> {
        let builder = merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path).required(true))
            .add_source(merge::merge_policy::environment());
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<DirTreeConfig, AppError> {
        let config: DirTreeConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            AppError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;

        Ok(config)
    }
}
