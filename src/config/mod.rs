pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::SettingsFile;
    use crate::core::calculator::CommandSettings;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "ifplan")]
    #[command(about = "Plan the shell commands that move a network interface between modes")]
    pub struct CliConfig {
        /// Two-line configuration files (version header, JSON body)
        #[arg(required = true, value_name = "FILE")]
        pub files: Vec<PathBuf>,

        /// TOML file with schema and interface settings
        #[arg(long, value_name = "TOML")]
        pub settings: Option<PathBuf>,

        /// Override the interface name used in generated commands
        #[arg(long)]
        pub interface: Option<String>,

        /// Print one JSON object per file instead of plain commands
        #[arg(long)]
        pub json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 合併設定檔與命令列覆蓋，並驗證結果
        pub fn command_settings(&self) -> Result<CommandSettings> {
            let mut settings = match &self.settings {
                Some(path) => SettingsFile::from_file(path)?.command_settings(),
                None => CommandSettings::default(),
            };

            if let Some(interface) = &self.interface {
                settings.interface = interface.clone();
            }

            settings.validate()?;
            Ok(settings)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            for file in &self.files {
                validate_path("files", file)?;
            }
            if let Some(path) = &self.settings {
                validate_path("settings", path)?;
            }
            Ok(())
        }
    }

}
