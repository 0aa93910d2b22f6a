//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_node_json, format_node_text, format_tree_text};
use crate::config::DirTreeConfig;
use crate::error::AppError;
use crate::tree::TreeBuilder;
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution: the resolved configuration.
pub struct RunContext {
    config: DirTreeConfig,
}

impl RunContext {
    pub fn with_config(config: DirTreeConfig) -> Self {
        Self { config }
    }

    /// Execute a command and return the text to print
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Build {
                path,
                format,
                pretty,
            } => self.handle_build(path, format.as_deref(), *pretty),
            Commands::Hash { path } => self.handle_hash(path),
            Commands::Lookup {
                path,
                entry,
                format,
            } => self.handle_lookup(path, entry, format.as_deref()),
        }
    }

    fn handle_build(
        &self,
        path: &Path,
        format: Option<&str>,
        pretty: bool,
    ) -> Result<String, AppError> {
        let tree = TreeBuilder::new(path).build()?;
        match self.resolve_format(format)? {
            "json" => format_node_json(&tree, pretty || self.config.output.pretty),
            _ => Ok(format_tree_text(&tree)),
        }
    }

    fn handle_hash(&self, path: &Path) -> Result<String, AppError> {
        let root = TreeBuilder::new(path).compute_root()?;
        info!(root_hash = %root, "Computed root hash");
        Ok(root.to_hex())
    }

    fn handle_lookup(
        &self,
        path: &Path,
        entry: &str,
        format: Option<&str>,
    ) -> Result<String, AppError> {
        let tree = TreeBuilder::new(path).build()?;
        let node = tree
            .locate(entry)
            .ok_or_else(|| AppError::EntryNotFound(entry.to_string()))?;
        match self.resolve_format(format)? {
            "json" => format_node_json(node, self.config.output.pretty),
            _ => Ok(format_node_text(node)),
        }
    }

    fn resolve_format<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str, AppError> {
        let format = requested.unwrap_or(self.config.output.format.as_str());
        match format {
            "text" | "json" => Ok(format),
            other => Err(AppError::Config(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}
