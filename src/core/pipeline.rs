use crate::adapters::FileSource;
use crate::core::calculator::{self, CommandSettings};
use crate::core::{loader, parser};
use crate::core::{Command, Configuration, Pipeline, RawConfiguration, Source};
use crate::utils::error::Result;
use std::path::Path;

/// 將三個階段綁定到一個來源與一組命令設定
pub struct InterfacePipeline<S: Source> {
    source: S,
    settings: CommandSettings,
}

impl<S: Source> InterfacePipeline<S> {
    pub fn new(source: S, settings: CommandSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }
}

impl Default for InterfacePipeline<FileSource> {
    fn default() -> Self {
        Self::new(FileSource::new(), CommandSettings::default())
    }
}

impl<S: Source> Pipeline for InterfacePipeline<S> {
    fn load(&self, path: &Path) -> Result<RawConfiguration> {
        loader::load(&self.source, path)
    }

    fn parse(&self, raw: RawConfiguration) -> Result<Configuration> {
        parser::parse(raw)
    }

    fn calculate(&self, configuration: &Configuration) -> Result<Vec<Command>> {
        calculator::calculate(&self.settings, configuration)
    }
}
