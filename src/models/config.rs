use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::analytics::Period;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub default_period: Period,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // File may predate this run with looser permissions.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Apply a single `key = value` setting.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "default_period" | "analytics.default_period" => {
                self.analytics.default_period = value.parse()?;
            }
            "log_level" | "logging.level" => {
                match value {
                    "error" | "warn" | "info" | "debug" | "trace" | "off" => {}
                    _ => anyhow::bail!(
                        "invalid log level: {} (expected off/error/warn/info/debug/trace)",
                        value
                    ),
                }
                self.logging.level = value.to_string();
            }
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> anyhow::Result<PathBuf> {
        if let Ok(home) = std::env::var("NUTRILOG_HOME") {
            return Ok(PathBuf::from(home));
        }
        dirs::home_dir()
            .map(|h| h.join(".nutrilog"))
            .ok_or_else(|| anyhow::anyhow!("cannot resolve home directory"))
    }

    pub fn path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    pub fn db_path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("data.db"))
    }
}
