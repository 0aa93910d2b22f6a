//! CLI domain: parse, route, output, and presentation only.
//! Tree construction lives in `crate::tree`; the route table only dispatches.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_node_json, format_node_text, format_tree_text};
pub use route::RunContext;
