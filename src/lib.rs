pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::file_source::FileNameSource;
pub use config::{ScaffoldConfig, TomlConfig};
pub use core::{engine::ScaffoldEngine, pipeline::ScaffoldPipeline, transform::to_struct_identifier};
pub use utils::error::{Result, ScaffoldError};
