use crate::core::calculator::{CommandSettings, CURRENT_VERSION, DEFAULT_INTERFACE};
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub interface: InterfaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default = "default_current_version")]
    pub current_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    #[serde(default = "default_interface_name")]
    pub name: String,
}

fn default_current_version() -> u32 {
    CURRENT_VERSION
}

fn default_interface_name() -> String {
    DEFAULT_INTERFACE.to_string()
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            current_version: default_current_version(),
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            name: default_interface_name(),
        }
    }
}

impl SettingsFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::settings("settings", format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| PlanError::settings("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${IFPLAN_INTERFACE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn command_settings(&self) -> CommandSettings {
        CommandSettings {
            current_version: self.schema.current_version,
            interface: self.interface.name.clone(),
        }
    }
}

impl Validate for SettingsFile {
    fn validate(&self) -> Result<()> {
        self.command_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_settings() {
        let toml_content = r#"
[schema]
current_version = 3

[interface]
name = "wlan0"
"#;

        let settings = SettingsFile::from_toml_str(toml_content).unwrap();

        assert_eq!(settings.schema.current_version, 3);
        assert_eq!(settings.interface.name, "wlan0");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = SettingsFile::from_toml_str("").unwrap();

        assert_eq!(settings.command_settings(), CommandSettings::default());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let settings = SettingsFile::from_toml_str("[interface]\n").unwrap();

        assert_eq!(settings.interface.name, "eth0");
        assert_eq!(settings.schema.current_version, 2);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("IFPLAN_TEST_INTERFACE", "enp3s0");

        let toml_content = r#"
[interface]
name = "${IFPLAN_TEST_INTERFACE}"
"#;

        let settings = SettingsFile::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.interface.name, "enp3s0");

        std::env::remove_var("IFPLAN_TEST_INTERFACE");
    }

    #[test]
    fn test_unset_env_var_is_left_alone_and_rejected() {
        let toml_content = r#"
[interface]
name = "${IFPLAN_TEST_UNSET_VARIABLE}"
"#;

        let settings = SettingsFile::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.interface.name, "${IFPLAN_TEST_UNSET_VARIABLE}");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = SettingsFile::from_toml_str("[interface]\nmtu = 1500\n").unwrap_err();
        assert!(matches!(err, PlanError::Settings { .. }));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[schema]\ncurrent_version = 1\n")
            .unwrap();

        let settings = SettingsFile::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.schema.current_version, 1);
        assert_eq!(settings.interface.name, "eth0");
    }

    #[test]
    fn test_missing_settings_file_is_settings_error() {
        let err = SettingsFile::from_file("/nonexistent/ifplan.toml").unwrap_err();
        assert!(matches!(err, PlanError::Settings { .. }));
        assert_eq!(err.category().exit_code(), 2);
        assert!(err.to_string().contains("/nonexistent/ifplan.toml"));
    }
}
