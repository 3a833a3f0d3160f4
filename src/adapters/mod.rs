// Adapters layer: concrete implementations of the domain ports.

use crate::domain::ports::Source;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// 從本地檔案系統讀取設定檔
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base_path: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 相對路徑以 `base_path` 為根目錄解析
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Source for FileSource {
    type Reader = BufReader<File>;

    fn open(&self, path: &Path) -> std::io::Result<Self::Reader> {
        let full_path = self.resolve(path);
        tracing::debug!("Opening configuration file: {}", full_path.display());
        Ok(BufReader::new(File::open(full_path)?))
    }
}
