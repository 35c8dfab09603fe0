#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{driver::Application, processor::ItemProcessor};
pub use crate::domain::model::{ItemStore, VERSION};
pub use crate::domain::ports::{ConfigProvider, Task};
pub use crate::utils::error::{PipelineError, Result};
