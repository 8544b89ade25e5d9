//! Configuration file management
//!
//! Loads TOML configuration describing how key events are filtered
//! before they reach the engine.
//! Default config path: ~/.config/rime-modifiers/config.toml

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::event::KeyEvent;
use crate::modifiers::Modifiers;
use crate::names;

/// Directory name under the user/system config directory
const APP_DIR: &str = "rime-modifiers";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Modifier filtering settings
    pub modifiers: ModifierConfig,
}

/// Modifier filtering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierConfig {
    /// Modifiers stripped from events (default: ["Lock", "Mod2"])
    /// Accepts a single name ("Lock") or a list (["Lock", "Mod2"])
    #[serde(
        deserialize_with = "deserialize_modifiers",
        serialize_with = "serialize_modifiers"
    )]
    pub ignore: Modifiers,
    /// Forward key release events to the engine (default: true)
    pub forward_release: bool,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            // CapsLock and NumLock should not change key bindings
            ignore: Modifiers::LOCK | Modifiers::MOD2,
            forward_release: true,
        }
    }
}

impl ModifierConfig {
    /// Apply filtering to an event
    ///
    /// Returns None if the event should not reach the engine.
    pub fn filter(&self, event: KeyEvent) -> Option<KeyEvent> {
        if event.is_release() && !self.forward_release {
            debug!("Dropping release event: {}", event);
            return None;
        }
        Some(event.without(self.ignore))
    }
}

/// Modifier list deserializer: accepts string or array of names
fn deserialize_modifiers<'de, D>(deserializer: D) -> std::result::Result<Modifiers, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct ModifiersVisitor;

    impl<'de> Visitor<'de> for ModifiersVisitor {
        type Value = Modifiers;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a modifier name, \"Shift+Control\" list, or array of names")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            names::parse_modifiers(value).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut mods = Modifiers::empty();
            while let Some(name) = seq.next_element::<String>()? {
                mods |= names::parse_modifier(&name)
                    .map_err(<A::Error as de::Error>::custom)?;
            }
            Ok(mods)
        }
    }

    deserializer.deserialize_any(ModifiersVisitor)
}

/// Modifier list serializer: writes an array of names
fn serialize_modifiers<S>(mods: &Modifiers, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(names::modifier_names(*mods))
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/rime-modifiers/config.toml";

    /// Environment variable overriding the config path
    pub const ENV_VAR: &'static str = "RIME_MODIFIERS_CONFIG";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. RIME_MODIFIERS_CONFIG environment variable
        if let Ok(path) = std::env::var(Self::ENV_VAR) {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
            warn!("{} points to missing file: {}", Self::ENV_VAR, path);
        }

        // 2. User config: ~/.config/rime-modifiers/config.toml
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 3. System config
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Load configuration with priority:
    /// 1. RIME_MODIFIERS_CONFIG environment variable
    /// 2. ~/.config/rime-modifiers/config.toml (user config)
    /// 3. /etc/rime-modifiers/config.toml (system config)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Render settings as a commented TOML template
    pub fn to_template(&self) -> Result<String> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            r#"# rime-modifiers configuration
#
# [modifiers]
# ignore:          modifiers stripped before events reach the engine
#                  names: Shift Lock Control Alt Mod2-Mod5 Button1-Button5
#                         Handled Forward Super Hyper Meta Release
# forward_release: send key release events to the engine

{}"#,
            body
        ))
    }

    /// Write default config to the user config path
    pub fn write_default_config() -> Result<PathBuf> {
        let config_path = default_config_path()
            .ok_or_else(|| anyhow::anyhow!("Config directory not found"))?;
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        std::fs::write(&config_path, Self::default().to_template()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }
}

/// Get default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.modifiers.ignore,
            Modifiers::LOCK | Modifiers::MOD2
        );
        assert!(config.modifiers.forward_release);
    }

    #[test]
    fn test_parse_ignore_array() {
        let config = Config::parse(
            r#"
[modifiers]
ignore = ["Lock", "mod2", "Mod3"]
forward_release = false
"#,
        )
        .unwrap();
        assert_eq!(
            config.modifiers.ignore,
            Modifiers::LOCK | Modifiers::MOD2 | Modifiers::MOD3
        );
        assert!(!config.modifiers.forward_release);
    }

    #[test]
    fn test_parse_ignore_string() {
        let config = Config::parse("[modifiers]\nignore = \"Lock+Button1\"\n").unwrap();
        assert_eq!(
            config.modifiers.ignore,
            Modifiers::LOCK | Modifiers::BUTTON1
        );

        let config = Config::parse("[modifiers]\nignore = []\n").unwrap();
        assert!(config.modifiers.ignore.is_empty());
    }

    #[test]
    fn test_parse_unknown_modifier() {
        assert!(Config::parse("[modifiers]\nignore = [\"NumLock\"]\n").is_err());
    }

    #[test]
    fn test_template_parses_back() {
        let config = Config {
            modifiers: ModifierConfig {
                ignore: Modifiers::LOCK | Modifiers::SUPER,
                forward_release: false,
            },
        };
        let template = config.to_template().unwrap();
        assert!(template.contains("\"Super\""));
        assert_eq!(Config::parse(&template).unwrap(), config);
    }

    #[test]
    fn test_filter() {
        let config = ModifierConfig::default();
        let event: KeyEvent = "Lock+Mod2+Control+a".parse().unwrap();
        let filtered = config.filter(event).unwrap();
        assert_eq!(filtered.modifiers, Modifiers::CONTROL);

        let release = event.with_release();
        assert!(config.filter(release).unwrap().is_release());

        let config = ModifierConfig {
            forward_release: false,
            ..ModifierConfig::default()
        };
        assert_eq!(config.filter(release), None);
        assert!(config.filter(event).is_some());
    }
}
