use anyhow::Context;
use clap::Parser;
use ifplan::utils::{logger, validation::Validate};
use ifplan::{CliConfig, Command, FileSource, InterfacePipeline, PlanEngine, PlanError};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<&'a [Command]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
}

impl<'a> FileReport<'a> {
    fn new(path: &Path, result: &'a Result<Vec<Command>, PlanError>) -> Self {
        let path = path.display().to_string();
        match result {
            Ok(commands) => Self {
                path,
                commands: Some(commands.as_slice()),
                error: None,
                category: None,
            },
            Err(e) => Self {
                path,
                commands: None,
                error: Some(e.to_string()),
                category: Some(e.category().as_str()),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ifplan CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let settings = match config.validate().and_then(|_| config.command_settings()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.category().exit_code());
        }
    };
    tracing::debug!("Command settings: {:?}", settings);

    let engine = PlanEngine::new(InterfacePipeline::new(FileSource::new(), settings));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut exit_code = 0;

    for file in &config.files {
        let result = engine.run(file);

        if let Err(e) = &result {
            eprintln!("❌ {}: {}", file.display(), e);
            if exit_code == 0 {
                exit_code = e.category().exit_code();
            }
        }

        if config.json {
            let report = FileReport::new(file, &result);
            let line = serde_json::to_string(&report).context("failed to serialize report")?;
            writeln!(out, "{}", line)?;
            continue;
        }

        if let Ok(commands) = &result {
            if config.files.len() > 1 {
                writeln!(out, "# {}", file.display())?;
            }
            for command in commands {
                writeln!(out, "{}", command)?;
            }
        }
    }

    out.flush()?;

    if exit_code != 0 {
        tracing::info!("Finished with failures (exit code {})", exit_code);
        std::process::exit(exit_code);
    }

    tracing::info!("✅ Planned commands for {} file(s)", config.files.len());
    Ok(())
}
