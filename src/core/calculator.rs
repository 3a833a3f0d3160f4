use crate::core::{Command, Configuration, Direction, Mode, Result};
use crate::utils::error::{ConfigurationError, UnsupportedFeatureError};
use crate::utils::validation::{validate_interface_name, validate_positive_number, Validate};

/// Schema version that introduced dhcp support.
pub const CURRENT_VERSION: u32 = 2;

pub const DEFAULT_INTERFACE: &str = "eth0";

/// 命令計算所需的不可變設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSettings {
    pub current_version: u32,
    pub interface: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            current_version: CURRENT_VERSION,
            interface: DEFAULT_INTERFACE.to_string(),
        }
    }
}

impl Validate for CommandSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("schema.current_version", self.current_version, 1)?;
        validate_interface_name("interface.name", &self.interface)?;
        Ok(())
    }
}

/// 先計算 down 再計算 up，任一方向失敗即不回傳任何命令
pub fn calculate(settings: &CommandSettings, configuration: &Configuration) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for direction in Direction::ORDER {
        let stage = calculate_direction(settings, configuration, direction)?;
        tracing::debug!("{} stage produced {} commands", direction, stage.len());
        commands.extend(stage);
    }

    Ok(commands)
}

pub fn calculate_direction(
    settings: &CommandSettings,
    configuration: &Configuration,
    direction: Direction,
) -> Result<Vec<Command>> {
    let value = configuration.mode_for(direction);
    let mode = Mode::parse(value).ok_or_else(|| ConfigurationError::UnsupportedMode {
        direction,
        value: value.to_string(),
    })?;

    let interface = &settings.interface;
    let lines = match (mode, direction) {
        (Mode::Dhcp, _) if configuration.version < settings.current_version => {
            return Err(UnsupportedFeatureError::DhcpRequiresNewerVersion {
                mode,
                required: settings.current_version,
                found: configuration.version,
            }
            .into());
        }
        (Mode::Dhcp, Direction::Down) => {
            vec!["pkill dhclient".to_string(), format!("ifdown {}", interface)]
        }
        (Mode::Dhcp, Direction::Up) => {
            vec![format!("ifup {}", interface), "dhclient".to_string()]
        }
        // static up 同樣輸出 ifdown，沿用既有行為
        (Mode::Static, _) => vec![format!("ifdown {}", interface)],
    };

    Ok(lines.into_iter().map(Command::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PlanError;
    use std::collections::HashMap;

    fn configuration(version: u32, pairs: &[(&str, &str)]) -> Configuration {
        Configuration {
            version,
            data: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn calc(version: u32, pairs: &[(&str, &str)]) -> Result<Vec<Command>> {
        calculate(&CommandSettings::default(), &configuration(version, pairs))
    }

    #[test]
    fn test_static_static() {
        for version in [0, 1, 2, 10] {
            let commands = calc(version, &[("down", "static"), ("up", "static")]).unwrap();
            assert_eq!(commands, vec!["ifdown eth0", "ifdown eth0"]);
        }
    }

    #[test]
    fn test_dhcp_dhcp() {
        for version in [2, 3, 100] {
            let commands = calc(version, &[("down", "dhcp"), ("up", "dhcp")]).unwrap();
            assert_eq!(
                commands,
                vec!["pkill dhclient", "ifdown eth0", "ifup eth0", "dhclient"]
            );
        }
    }

    #[test]
    fn test_dhcp_down_static_up() {
        let commands = calc(2, &[("down", "dhcp"), ("up", "static")]).unwrap();
        assert_eq!(commands, vec!["pkill dhclient", "ifdown eth0", "ifdown eth0"]);
    }

    #[test]
    fn test_static_down_dhcp_up() {
        let commands = calc(2, &[("down", "static"), ("up", "dhcp")]).unwrap();
        assert_eq!(commands, vec!["ifdown eth0", "ifup eth0", "dhclient"]);
    }

    #[test]
    fn test_dhcp_requires_current_version() {
        let cases: [&[(&str, &str)]; 3] = [
            &[("down", "dhcp"), ("up", "static")],
            &[("down", "static"), ("up", "dhcp")],
            &[("down", "dhcp"), ("up", "dhcp")],
        ];

        for version in [0, 1] {
            for pairs in cases {
                match calc(version, pairs) {
                    Err(PlanError::UnsupportedFeature(
                        UnsupportedFeatureError::DhcpRequiresNewerVersion {
                            required, found, ..
                        },
                    )) => {
                        assert_eq!(required, 2);
                        assert_eq!(found, version);
                    }
                    other => panic!("Expected DhcpRequiresNewerVersion, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_unsupported_mode() {
        match calc(2, &[("down", "bogus"), ("up", "static")]) {
            Err(PlanError::Configuration(ConfigurationError::UnsupportedMode { direction, value })) => {
                assert_eq!(direction, Direction::Down);
                assert_eq!(value, "bogus");
            }
            other => panic!("Expected UnsupportedMode, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_mode_is_unsupported() {
        match calc(2, &[("down", "static")]) {
            Err(PlanError::Configuration(ConfigurationError::UnsupportedMode { direction, value })) => {
                assert_eq!(direction, Direction::Up);
                assert!(value.is_empty());
            }
            other => panic!("Expected UnsupportedMode, got {:?}", other),
        }
    }

    #[test]
    fn test_down_failure_wins_over_up() {
        // down is invalid and up would also fail the version gate
        match calc(1, &[("down", "bogus"), ("up", "dhcp")]) {
            Err(PlanError::Configuration(ConfigurationError::UnsupportedMode { direction, .. })) => {
                assert_eq!(direction, Direction::Down);
            }
            other => panic!("Expected UnsupportedMode for down, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_settings() {
        let settings = CommandSettings {
            current_version: 3,
            interface: "wlan0".to_string(),
        };

        let commands =
            calculate(&settings, &configuration(3, &[("down", "dhcp"), ("up", "dhcp")])).unwrap();
        assert_eq!(
            commands,
            vec!["pkill dhclient", "ifdown wlan0", "ifup wlan0", "dhclient"]
        );

        let err = calculate(&settings, &configuration(2, &[("down", "dhcp"), ("up", "dhcp")]))
            .unwrap_err();
        assert!(matches!(err, PlanError::UnsupportedFeature(_)));
    }

    #[test]
    fn test_settings_validation() {
        assert!(CommandSettings::default().validate().is_ok());

        let zero_version = CommandSettings {
            current_version: 0,
            ..CommandSettings::default()
        };
        assert!(zero_version.validate().is_err());

        let shell_injection = CommandSettings {
            interface: "eth0; reboot".to_string(),
            ..CommandSettings::default()
        };
        assert!(shell_injection.validate().is_err());
    }
}
