//! FBX export scene normalization core.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub use self::cli_opt::{CliOpt, OutputFormat};

mod cli_opt;
pub mod data;
pub mod export;
pub mod sink;
pub mod source;
