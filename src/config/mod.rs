use crate::errors::{AppError, AppResult};
use crate::models::Coords;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    /// Position reported by the geolocation provider.
    #[serde(default)]
    pub home: Option<Coords>,
}

fn default_storage_key() -> String {
    "workouts".to_string()
}
fn default_map_zoom() -> u8 {
    13
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            storage_key: default_storage_key(),
            map_zoom: default_map_zoom(),
            home: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("mapty")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".mapty")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mapty.conf")
    }

    /// Return the full path of the SQLite storage file
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("mapty.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Initialize configuration and storage files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("database: /tmp/m.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/m.sqlite");
        assert_eq!(cfg.storage_key, "workouts");
        assert_eq!(cfg.map_zoom, 13);
        assert!(cfg.home.is_none());
    }

    #[test]
    fn home_is_read_as_lat_lng_pair() {
        let cfg = Config::from_yaml("database: x\nhome: [51.5, -0.12]\nmap_zoom: 15\n").unwrap();
        assert_eq!(cfg.home, Some(Coords::new(51.5, -0.12)));
        assert_eq!(cfg.map_zoom, 15);
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("database: [unclosed"),
            Err(AppError::Config(_))
        ));
    }
}
