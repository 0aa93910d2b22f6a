//! Configuration sources layered by the loader.

pub mod global_file;
