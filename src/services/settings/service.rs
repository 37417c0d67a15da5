use crate::models::settings::GridSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "grid.toml";

/// Loads and saves [`GridSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the platform config directory, falling back to the
    /// working directory when none can be resolved.
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "CalendarLayout", "CalendarLayout") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for grid settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; a missing file yields the defaults.
    pub fn get(&self) -> Result<GridSettings> {
        if !self.path.exists() {
            log::debug!(
                "No grid settings at {}; using defaults",
                self.path.display()
            );
            return Ok(GridSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read grid settings from {}", self.path.display()))?;
        let settings: GridSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse grid settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid grid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Like [`SettingsService::get`], but logs and falls back to defaults on
    /// any error so a broken file never blocks rendering.
    pub fn get_or_default(&self) -> GridSettings {
        self.get().unwrap_or_else(|err| {
            log::warn!("Falling back to default grid settings: {err:?}");
            GridSettings::default()
        })
    }

    /// Validate and write settings
    pub fn update(&self, settings: &GridSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid grid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize grid settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write grid settings to {}", self.path.display()))?;
        log::info!("Saved grid settings to {}", self.path.display());
        Ok(())
    }
}
