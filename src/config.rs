use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::palette::{Palette, Theme};
use crate::storage::DATABASE_FILE_NAME;

/// Locale used when neither the config nor the command line names one
pub const DEFAULT_LOCALE: &str = "es";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PictoConfig {
    /// Writable directory the database is installed into
    pub data_dir: Option<String>,
    /// Bundled read-only database snapshot
    pub bundled_database: Option<String>,
    pub locale: Option<String>,
    /// Reinstall the bundled snapshot on every launch
    pub refresh_on_launch: Option<bool>,
    /// Directories searched for image, sound and thumbnail files
    #[serde(default)]
    pub asset_dirs: Vec<String>,
    #[serde(default)]
    pub settings: Settings,
}

impl PictoConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join(DATABASE_FILE_NAME)
    }

    pub fn bundled_database(&self) -> PathBuf {
        self.bundled_database
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("resources").join(DATABASE_FILE_NAME))
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub fn refresh_on_launch(&self) -> bool {
        self.refresh_on_launch.unwrap_or(true)
    }
}

/// User preferences persisted between launches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub use_capitals: bool,
    pub selected_theme: u32,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_capitals: true,
            selected_theme: 0,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Remember `theme` and adopt its colors
    pub fn select_theme(&mut self, theme: &Theme) {
        self.selected_theme = theme.id;
        self.palette = theme.palette;
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("pictoconnection.toml")
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(".pictoconnection")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PictoConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: PictoConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &PictoConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).unwrap().is_none());
    }

    #[test]
    fn test_roundtrip_with_selected_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pictoconnection.toml");

        let mut config = PictoConfig {
            locale: Some("en".to_string()),
            asset_dirs: vec!["images".to_string(), "sounds".to_string()],
            ..Default::default()
        };
        config.settings.select_theme(&Theme::by_id(1).unwrap());
        config.settings.use_capitals = false;

        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.locale(), "en");
        assert_eq!(loaded.asset_dirs, config.asset_dirs);
        assert_eq!(loaded.settings, config.settings);
        assert_eq!(loaded.settings.palette.background.to_rgb_int(), 0xfa8ead);
    }

    #[test]
    fn test_defaults() {
        let config: PictoConfig = toml::from_str("").unwrap();
        assert_eq!(config.locale(), DEFAULT_LOCALE);
        assert!(config.refresh_on_launch());
        assert!(config.settings.use_capitals);
        assert_eq!(config.settings.palette, Palette::default());
        assert_eq!(config.database_path(), default_data_dir().join(DATABASE_FILE_NAME));
    }

    #[test]
    fn test_partial_settings_table() {
        let config: PictoConfig = toml::from_str(
            "[settings]\nuse_capitals = false\n\n[settings.palette]\nbackground = \"#000000\"\nmenu_text = \"#ffffff\"\nnavigation_bar_background = \"#111111\"\nnavigation_bar_text = \"#ffffff\"\nspeaker_button_background = \"#ffff00\"\nspeaker_button_text = \"#000000\"\n",
        ).unwrap();
        assert!(!config.settings.use_capitals);
        assert_eq!(config.settings.selected_theme, 0);
        assert_eq!(config.settings.palette.navigation_bar_background.to_rgb_int(), 0x111111);
    }
}
