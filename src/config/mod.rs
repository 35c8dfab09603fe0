use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "item-pipeline")]
#[command(about = "Loads text items in order and emits each one to stdout")]
pub struct CliConfig {
    /// Items to load, in order
    pub items: Vec<String>,

    #[arg(long, help = "Validate items on the way into the store")]
    pub strict: bool,

    #[arg(long, help = "Print the store snapshot as JSON after processing")]
    pub json: bool,

    #[arg(long, help = "Print the component version and exit")]
    pub show_version: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn items(&self) -> &[String] {
        &self.items
    }

    fn strict(&self) -> bool {
        self.strict
    }
}
