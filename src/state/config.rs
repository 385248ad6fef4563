//! Configuration management

use crate::state::session::{clamp_rate, DEFAULT_RATE};
use crate::{Result, TtscError};
use ini::Ini;
use log::{debug, info};
use std::path::PathBuf;

/// Application configuration
///
/// Persists user preferences (default rate, preferred voice, export
/// language) in an INI file. The last-saved audio path is deliberately not
/// a preference and never lands here.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.ttsc.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the home directory or create the default
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path, creating it if absent
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| TtscError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| TtscError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| TtscError::Config(format!("Failed to save config: {}", e)))
    }

    /// Config file path (~/.ttsc.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ttsc.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("rate", DEFAULT_RATE.to_string())
            .set("voice", "");

        ini.with_section(Some("cloud")).set("language", "en");

        ini
    }

    /// Get a string value from config
    fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Preferred speech rate in words per minute, clamped to the valid range
    pub fn rate(&self) -> u16 {
        clamp_rate(self.get_int("speech", "rate", i64::from(DEFAULT_RATE)))
    }

    /// Preferred voice display name; empty means "first enumerated voice"
    pub fn voice(&self) -> String {
        self.get_string("speech", "voice", "")
    }

    /// Language tag sent to the MP3 synthesis service
    pub fn language(&self) -> String {
        self.get_string("cloud", "language", "en")
    }
}
