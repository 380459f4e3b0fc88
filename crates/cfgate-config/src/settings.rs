use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Service settings (~/.config/cfgate/cfgate.toml)
// ============================================================================

/// Settings for the cfgate service itself, not the managed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Reject every write request
    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Location of the JSON configuration document
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            read_only: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    17380
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "cfgate", "cfgate")
}

impl Settings {
    /// Load settings from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&settings)?;
            std::fs::write(path, content)?;
            Ok(settings)
        }
    }

    /// Get settings file path
    pub fn settings_path() -> PathBuf {
        if let Some(dirs) = project_dirs() {
            dirs.config_dir().join("cfgate.toml")
        } else {
            PathBuf::from("~/.cfgate/cfgate.toml")
        }
    }
}

impl StoreSettings {
    /// Configured document path, falling back to the platform data dir
    pub fn document_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        if let Some(dirs) = project_dirs() {
            dirs.data_dir().join("config.json")
        } else {
            PathBuf::from("~/.cfgate/config.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 17380);
        assert!(!settings.server.read_only);
        assert!(settings.store.path.is_none());
    }

    #[test]
    fn test_settings_serialization() {
        let mut settings = Settings::default();
        settings.store.path = Some(PathBuf::from("/tmp/cfgate/config.json"));
        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, settings.server.port);
        assert_eq!(parsed.store.path, settings.store.path);
    }

    #[test]
    fn test_partial_settings_file() {
        let parsed: Settings = toml::from_str("[server]\nread_only = true\n").unwrap();
        assert!(parsed.server.read_only);
        assert_eq!(parsed.server.port, 17380);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cfgate.toml");

        let settings = Settings::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(settings.server.port, 17380);

        std::fs::write(&path, "[server]\nport = 9999\n").unwrap();
        let reloaded = Settings::load_from(&path).unwrap();
        assert_eq!(reloaded.server.port, 9999);
    }

    #[test]
    fn test_document_path_override() {
        let store = StoreSettings {
            path: Some(PathBuf::from("/srv/cfgate.json")),
        };
        assert_eq!(store.document_path(), PathBuf::from("/srv/cfgate.json"));
        assert!(StoreSettings::default().document_path().ends_with("config.json"));
    }
}
