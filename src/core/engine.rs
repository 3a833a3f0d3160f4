use crate::core::{Command, Pipeline};
use crate::utils::error::Result;
use std::path::Path;

pub struct PlanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 依序執行 load → parse → calculate，第一個錯誤原樣回傳
    pub fn run(&self, path: &Path) -> Result<Vec<Command>> {
        tracing::debug!("Planning commands for {}", path.display());

        // Load
        let raw = self.pipeline.load(path)?;

        // Parse
        let configuration = self.pipeline.parse(raw)?;
        tracing::debug!("Configuration version: {}", configuration.version);

        // Calculate
        let commands = self.pipeline.calculate(&configuration)?;
        tracing::debug!("Planned {} commands", commands.len());

        Ok(commands)
    }
}
