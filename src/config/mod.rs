use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the conventions feed JSON document
    pub feed: String,
    /// Cap on the past-conventions listing (0 = show everything)
    #[serde(default = "default_past_limit")]
    pub past_limit: usize,
    /// Print the start weekday in the `show` output
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_past_limit() -> usize {
    0
}
fn default_show_weekday() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: Self::feed_file().to_string_lossy().to_string(),
            past_limit: default_past_limit(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("convtab")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".convtab")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("convtab.conf")
    }

    /// Return the default path of the feed document
    pub fn feed_file() -> PathBuf {
        Self::config_dir().join("conventions.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A config file that fails to parse falls back to defaults with a
    /// warning instead of aborting.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    messages::warning(format!(
                        "Failed to parse {}: {} (using defaults)",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                messages::warning(format!(
                    "Failed to read {}: {} (using defaults)",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Initialize configuration and a starter feed document
    pub fn init_all() -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        messages::success(format!("Config file: {:?}", Self::config_file()));

        // Create an empty feed so `list` works out of the box
        let feed_path = Self::feed_file();
        if !feed_path.exists() {
            fs::write(&feed_path, "{\n  \"conventions\": []\n}\n")?;
        }
        messages::success(format!("Feed:        {:?}", feed_path));

        Ok(())
    }
}
