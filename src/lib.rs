pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FileSource;
pub use config::toml_config::SettingsFile;
pub use crate::core::{
    calculator::CommandSettings, engine::PlanEngine, pipeline::InterfacePipeline,
};
pub use domain::model::{Command, Configuration, Direction, Mode, RawConfiguration};
pub use utils::error::{
    ConfigurationError, ErrorCategory, FormatError, PlanError, Result, UnsupportedFeatureError,
};

use std::path::Path;

/// 以預設設定 (eth0、schema 版本 2) 從檔案計算命令
pub fn run(path: impl AsRef<Path>) -> Result<Vec<Command>> {
    PlanEngine::new(InterfacePipeline::<FileSource>::default()).run(path.as_ref())
}
