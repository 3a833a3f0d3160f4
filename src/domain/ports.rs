use crate::domain::model::{Command, Configuration, RawConfiguration};
use crate::utils::error::Result;
use std::io::BufRead;
use std::path::Path;

/// 設定來源：檔案系統或測試用的記憶體實作
pub trait Source: Send + Sync {
    type Reader: BufRead;

    fn open(&self, path: &Path) -> std::io::Result<Self::Reader>;
}

pub trait Pipeline: Send + Sync {
    fn load(&self, path: &Path) -> Result<RawConfiguration>;
    fn parse(&self, raw: RawConfiguration) -> Result<Configuration>;
    fn calculate(&self, configuration: &Configuration) -> Result<Vec<Command>>;
}
