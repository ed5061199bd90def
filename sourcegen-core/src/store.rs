use settings::{AppSettings, SettingEnum, SettingsError};
use std::path::{Path, PathBuf};

/// The settings registry shared by every dialog, plus the file it persists to.
///
/// Dialogs receive the store by `&mut` in their constructor and call
/// [`SettingsStore::flush`] from their confirm action, so anything they wrote
/// is on disk by the time confirm returns.
#[derive(Debug)]
pub struct SettingsStore {
    settings: AppSettings,
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn in_memory() -> Self {
        Self {
            settings: AppSettings::new(),
            path: None,
        }
    }

    /// Loads `path` if it exists. A file that can't be read or parsed is
    /// logged and replaced by an empty registry.
    pub fn open(path: PathBuf) -> Self {
        let settings = if path.exists() {
            match AppSettings::load_from_file(&path) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!(
                        "Failed to load settings file '{}': {err}; using defaults",
                        path.display()
                    );
                    AppSettings::new()
                }
            }
        } else {
            AppSettings::new()
        };
        Self {
            settings,
            path: Some(path),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    pub fn get_bool(&self, name: &str, default_value: bool) -> bool {
        self.settings.get_bool(name, default_value)
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.settings.set_bool(name, value);
    }

    pub fn get_int(&self, name: &str, default_value: i32) -> i32 {
        self.settings.get_int(name, default_value)
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.settings.set_int(name, value);
    }

    pub fn get_enum<E: SettingEnum>(&self, name: &str, default_value: E) -> E {
        self.settings.get_enum(name, default_value)
    }

    pub fn set_enum<E: SettingEnum>(&mut self, name: &str, value: E) {
        self.settings.set_enum(name, value);
    }

    pub fn get_string(&self, name: &str, default_value: &str) -> String {
        self.settings.get_string(name, default_value)
    }

    pub fn set_string(&mut self, name: &str, value: Option<&str>) {
        self.settings.set_string(name, value);
    }

    /// Writes pending changes to the backing file. Returns `Ok(true)` when
    /// something was written.
    pub fn flush(&mut self) -> Result<bool, SettingsError> {
        if !self.settings.is_dirty() {
            return Ok(false);
        }
        let Some(path) = &self.path else {
            self.settings.clear_dirty();
            return Ok(false);
        };
        self.settings.save_to_file(path)?;
        self.settings.clear_dirty();
        log::debug!("Saved settings to '{}'", path.display());
        Ok(true)
    }

    /// Flush from a confirm action: failures are logged, never fatal.
    pub(crate) fn flush_logged(&mut self) {
        if let Err(err) = self.flush() {
            log::error!("Failed to save settings: {err}");
        }
    }
}
