use crate::error::{Result, VgError};
use crate::scan::FilterMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Order used when listing tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSort {
    /// Alphabetical (byte order).
    #[default]
    Alpha,
    /// Most-used first, ties alphabetical.
    Usage,
}

impl fmt::Display for TagSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSort::Alpha => write!(f, "alpha"),
            TagSort::Usage => write!(f, "usage"),
        }
    }
}

impl FromStr for TagSort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alpha" | "name" => Ok(TagSort::Alpha),
            "usage" | "count" => Ok(TagSort::Usage),
            other => Err(format!("Unknown tag sort '{}' (expected alpha/usage)", other)),
        }
    }
}

/// Configuration for vgroups, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VgConfig {
    /// Leave `view-<guid>` membership tags out of tag listings
    #[serde(default = "default_hide_membership_tags")]
    pub hide_membership_tags: bool,

    /// Default order for tag listings
    #[serde(default)]
    pub tag_sort: TagSort,

    /// How palette actions combine several picked tags
    #[serde(default)]
    pub palette_mode: FilterMode,
}

fn default_hide_membership_tags() -> bool {
    true
}

impl Default for VgConfig {
    fn default() -> Self {
        Self {
            hide_membership_tags: default_hide_membership_tags(),
            tag_sort: TagSort::default(),
            palette_mode: FilterMode::default(),
        }
    }
}

impl VgConfig {
    pub const KEYS: [&'static str; 3] = ["hide-membership-tags", "tag-sort", "palette-mode"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VgConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "hide-membership-tags" => Some(self.hide_membership_tags.to_string()),
            "tag-sort" => Some(self.tag_sort.to_string()),
            "palette-mode" => Some(self.palette_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "hide-membership-tags" => {
                self.hide_membership_tags = parse_bool(value)
                    .ok_or_else(|| VgError::Api(format!("Expected true/false, got '{}'", value)))?;
            }
            "tag-sort" => self.tag_sort = value.parse().map_err(VgError::Api)?,
            "palette-mode" => self.palette_mode = value.parse().map_err(VgError::Api)?,
            other => return Err(VgError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = VgConfig::default();
        assert!(config.hide_membership_tags);
        assert_eq!(config.tag_sort, TagSort::Alpha);
        assert_eq!(config.palette_mode, FilterMode::Or);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = VgConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, VgConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("vgroups");

        let mut config = VgConfig::default();
        config.set("tag-sort", "usage").unwrap();
        config.set("palette-mode", "and").unwrap();
        config.set("hide-membership-tags", "false").unwrap();
        config.save(&nested).unwrap();

        let loaded = VgConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"tag_sort": "usage"}"#,
        )
        .unwrap();

        let loaded = VgConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.tag_sort, TagSort::Usage);
        assert!(loaded.hide_membership_tags);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            VgConfig::load(dir.path()),
            Err(VgError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_and_set() {
        let mut config = VgConfig::default();
        assert_eq!(config.get("tag-sort").as_deref(), Some("alpha"));
        assert_eq!(config.get("unknown"), None);

        config.set("hide-membership-tags", "off").unwrap();
        assert_eq!(config.get("hide-membership-tags").as_deref(), Some("false"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = VgConfig::default();
        assert!(config.set("tag-sort", "random").is_err());
        assert!(config.set("palette-mode", "xor").is_err());
        assert!(config.set("hide-membership-tags", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, VgConfig::default());
    }
}
