use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clock::{parse_duration, UrgencyPalette};
use crate::controller::InitialTimes;
use crate::paths;

/// Used for any side with no time given anywhere.
pub const DEFAULT_TIME: &str = "5m";

/// Application configuration, loaded from config.toml.
///
/// Every section is `#[serde(default)]`, so the file is optional and any
/// field left out falls back to the value in the Default impl.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub clock: ClockConfig,
    pub display: DisplayConfig,
    pub palette: UrgencyPalette,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Budget for both sides unless `t1`/`t2` override it.
    pub default_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t2: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Redraw interval when no input arrives.
    pub tick_rate_ms: u64,
    /// Show the pause / fullscreen / reset column.
    pub buttons: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter passed to env_logger; RUST_LOG wins when set.
    pub level: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_time: DEFAULT_TIME.into(),
            t1: None,
            t2: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            buttons: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Time strings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct TimeArgs {
    pub t: Option<String>,
    pub t1: Option<String>,
    pub t2: Option<String>,
}

impl AppConfig {
    /// Resolve both starting budgets.
    ///
    /// Per side the first one present wins: `--t1`/`--t2`, `--t`,
    /// `clock.t1`/`clock.t2`, `clock.default_time`.
    pub fn initial_times(&self, args: &TimeArgs) -> Result<InitialTimes> {
        let pick = |side: &Option<String>, config_side: &Option<String>| -> String {
            side.clone()
                .or_else(|| args.t.clone())
                .or_else(|| config_side.clone())
                .unwrap_or_else(|| self.clock.default_time.clone())
        };

        let left = pick(&args.t1, &self.clock.t1);
        let right = pick(&args.t2, &self.clock.t2);

        Ok(InitialTimes {
            left: parse_duration(&left)
                .with_context(|| format!("Invalid time for player 1: {left:?}"))?,
            right: parse_duration(&right)
                .with_context(|| format!("Invalid time for player 2: {right:?}"))?,
        })
    }
}

/// Load the application config from $XDG_CONFIG_HOME/chessclock/config.toml.
/// If the file doesn't exist, returns defaults.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&paths::config_file())
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Rgb;
    use tempfile::TempDir;

    fn args(t: Option<&str>, t1: Option<&str>, t2: Option<&str>) -> TimeArgs {
        TimeArgs {
            t: t.map(String::from),
            t1: t1.map(String::from),
            t2: t2.map(String::from),
        }
    }

    #[test]
    fn default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.clock.default_time, "5m");
        assert_eq!(cfg.display.tick_rate_ms, 33);
        assert!(cfg.display.buttons);
        assert_eq!(cfg.palette.safe, Rgb(0, 255, 192));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[clock]
t2 = "3m"

[palette]
critical = [255, 0, 0]
"#;
        let cfg: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.clock.t2.as_deref(), Some("3m"));
        assert_eq!(cfg.clock.default_time, "5m");
        assert_eq!(cfg.palette.critical, Rgb(255, 0, 0));
        // Unspecified palette entries keep their defaults
        assert_eq!(cfg.palette.warning, Rgb(255, 192, 0));
        assert_eq!(cfg.display.tick_rate_ms, 33);
    }

    #[test]
    fn roundtrip_toml() {
        let cfg = AppConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let loaded: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.clock.default_time, cfg.clock.default_time);
        assert_eq!(loaded.palette, cfg.palette);
    }

    #[test]
    fn defaults_to_five_minutes_each() {
        let times = AppConfig::default().initial_times(&TimeArgs::default()).unwrap();
        assert_eq!(times, InitialTimes { left: 300.0, right: 300.0 });
    }

    #[test]
    fn fallback_applies_to_both_sides() {
        let times = AppConfig::default()
            .initial_times(&args(Some("1h30m"), None, None))
            .unwrap();
        assert_eq!(times, InitialTimes { left: 5400.0, right: 5400.0 });
    }

    #[test]
    fn per_side_overrides_fallback() {
        let times = AppConfig::default()
            .initial_times(&args(Some("10m"), None, Some("90")))
            .unwrap();
        assert_eq!(times, InitialTimes { left: 600.0, right: 90.0 });
    }

    #[test]
    fn command_line_beats_config_file() {
        let mut cfg = AppConfig::default();
        cfg.clock.t1 = Some("1m".into());
        cfg.clock.t2 = Some("2m".into());
        cfg.clock.default_time = "7m".into();

        let from_config = cfg.initial_times(&TimeArgs::default()).unwrap();
        assert_eq!(from_config, InitialTimes { left: 60.0, right: 120.0 });

        let from_args = cfg.initial_times(&args(Some("30s"), None, None)).unwrap();
        assert_eq!(from_args, InitialTimes { left: 30.0, right: 30.0 });
    }

    #[test]
    fn bad_time_names_the_player() {
        let err = AppConfig::default()
            .initial_times(&args(None, None, Some("abc")))
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("player 2"), "{msg}");
        assert!(msg.contains("abc"), "{msg}");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_config_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(cfg.clock.default_time, "5m");
    }

    #[test]
    fn loads_file_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[display]\nbuttons = false\ntick_rate_ms = 50\n").unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert!(!cfg.display.buttons);
        assert_eq!(cfg.display.tick_rate_ms, 50);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[display\nbuttons = maybe").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
