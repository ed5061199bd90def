//! Application settings registry.
//!
//! Everything is stored as name/value pairs with the value kept as a string.
//! Names are case-sensitive. Entries that nothing in the current build reads
//! are kept, so a file written by a newer build survives a round trip through
//! an older one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub mod keys;
mod value;

pub use value::SettingEnum;
use value::{format_bool, parse_bool, parse_int};

/// First line of every settings file.
pub const MAGIC: &str = "### sourcegen settings v1.0 ###";

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings header not found")]
    MissingHeader,
}

#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any setter has run since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Raw name/value pairs in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Replaces every entry with a copy of `other`'s entries.
    ///
    /// The object itself is kept, so anything holding on to it sees the new
    /// contents.
    pub fn replace_settings(&mut self, other: &AppSettings) {
        self.entries = other.entries.clone();
        self.dirty = true;
    }

    /// Copies `other`'s entries over this one's, keeping names `other` lacks.
    pub fn merge_settings(&mut self, other: &AppSettings) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
        self.dirty = true;
    }

    pub fn get_int(&self, name: &str, default_value: i32) -> i32 {
        let Some(raw) = self.entries.get(name) else {
            return default_value;
        };
        match parse_int(raw) {
            Some(value) => value,
            None => {
                log::warn!("int parse failed on {name}={raw}");
                default_value
            }
        }
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.put(name, value.to_string());
    }

    pub fn get_bool(&self, name: &str, default_value: bool) -> bool {
        let Some(raw) = self.entries.get(name) else {
            return default_value;
        };
        match parse_bool(raw) {
            Some(value) => value,
            None => {
                log::warn!("bool parse failed on {name}={raw}");
                default_value
            }
        }
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.put(name, format_bool(value).to_string());
    }

    /// Returns the stored enum value, or `default_value` when the name is
    /// absent or the stored text is not a member of `E`.
    pub fn get_enum<E: SettingEnum>(&self, name: &str, default_value: E) -> E {
        let Some(raw) = self.entries.get(name) else {
            return default_value;
        };
        match E::from_setting_str(raw) {
            Some(value) => value,
            None => {
                log::warn!(
                    "failed to parse {raw} as {} for {name}",
                    std::any::type_name::<E>()
                );
                default_value
            }
        }
    }

    pub fn set_enum<E: SettingEnum>(&mut self, name: &str, value: E) {
        self.put(name, value.name().to_string());
    }

    pub fn get_string(&self, name: &str, default_value: &str) -> String {
        self.entries
            .get(name)
            .cloned()
            .unwrap_or_else(|| default_value.to_string())
    }

    /// Stores a string. `None` removes the setting.
    pub fn set_string(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.put(name, value.to_string()),
            None => {
                self.entries.remove(name);
                self.dirty = true;
            }
        }
    }

    fn put(&mut self, name: &str, value: String) {
        log::debug!("setting {name}={value}");
        self.entries.insert(name.to_string(), value);
        self.dirty = true;
    }

    /// Header line followed by a JSON object, one entry per line.
    pub fn serialize(&self) -> Result<String, SettingsError> {
        let body = serde_json::to_string_pretty(&self.entries)?;
        let mut out = String::with_capacity(MAGIC.len() + body.len() + 2);
        out.push_str(MAGIC);
        out.push('\n');
        out.push_str(&body);
        out.push('\n');
        Ok(out)
    }

    pub fn deserialize(text: &str) -> Result<Self, SettingsError> {
        let body = text
            .strip_prefix(MAGIC)
            .ok_or(SettingsError::MissingHeader)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(body)?;
        Ok(Self {
            entries,
            dirty: false,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::deserialize(&text)
    }

    /// Writes to a temporary sibling, then renames it over `path`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = self.serialize()?;
        let tmp_path = temp_path_for(path);
        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

/// `settings.json` -> `settings.json.tmp`, so targets differing only by
/// extension never share a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => path.with_extension("tmp"),
    }
}
