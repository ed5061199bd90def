use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum VisSetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trims `tag` and checks it is long enough to be used.
pub fn trim_and_validate_tag(tag: &str) -> Option<&str> {
    let trimmed = tag.trim();
    if trimmed.chars().count() < Visualization::MIN_TAG_LEN {
        None
    } else {
        Some(trimmed)
    }
}

/// One visualization in a set. The serial number identifies it across edits,
/// so callers can tell which items a set editor removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVisualization")]
pub struct Visualization {
    serial: u32,
    tag: String,
    generator: String,
}

#[derive(Deserialize)]
struct RawVisualization {
    serial: u32,
    tag: String,
    generator: String,
}

impl TryFrom<RawVisualization> for Visualization {
    type Error = String;

    fn try_from(raw: RawVisualization) -> Result<Self, Self::Error> {
        Visualization::new(raw.serial, &raw.tag, &raw.generator)
            .ok_or_else(|| format!("invalid visualization tag '{}'", raw.tag))
    }
}

impl Visualization {
    pub const MIN_TAG_LEN: usize = 2;

    pub fn new(serial: u32, tag: &str, generator: &str) -> Option<Self> {
        let tag = trim_and_validate_tag(tag)?;
        Some(Self {
            serial,
            tag: tag.to_string(),
            generator: generator.to_string(),
        })
    }

    /// A copy with a new tag and the same serial number.
    pub fn with_tag(&self, tag: &str) -> Option<Self> {
        Self::new(self.serial, tag, &self.generator)
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }
}

/// Named, ordered group of visualizations.
///
/// The label is never blank: [`VisualizationSet::new`] returns `None` instead
/// of building a set without a name. Sets are immutable; editing produces a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVisualizationSet")]
pub struct VisualizationSet {
    label: String,
    items: Vec<Visualization>,
}

#[derive(Deserialize)]
struct RawVisualizationSet {
    label: String,
    #[serde(default)]
    items: Vec<Visualization>,
}

impl TryFrom<RawVisualizationSet> for VisualizationSet {
    type Error = &'static str;

    fn try_from(raw: RawVisualizationSet) -> Result<Self, Self::Error> {
        VisualizationSet::new(&raw.label, raw.items).ok_or("visualization set label is empty")
    }
}

impl VisualizationSet {
    pub fn new(label: &str, items: Vec<Visualization>) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            items,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[Visualization] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Visualization> {
        self.items.iter().find(|vis| vis.tag == tag)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), VisSetError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, VisSetError> {
        let data = fs::read(path)?;
        let set = serde_json::from_slice(&data)?;
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a VisualizationSet {
    type Item = &'a Visualization;
    type IntoIter = std::slice::Iter<'a, Visualization>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
