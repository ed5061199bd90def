use super::{LabelFormat, LabelGenError};
use crate::store::SettingsStore;
use serde::{Deserialize, Serialize};
use settings::keys;
use std::cmp::Ordering;
use std::io::Write;

/// Character that separates a non-unique label from its uniquifier.
pub const UNIQUE_TAG_CHAR: char = '\u{00a7}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSource {
    User,
    AddrPreLabel,
    Auto,
    Project,
    Platform,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub label: String,
    pub value: u32,
    pub source: SymbolSource,
    #[serde(default)]
    pub non_unique: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelGenOptions {
    pub format: LabelFormat,
    pub include_auto_labels: bool,
}

impl LabelGenOptions {
    /// Reads the options last confirmed in the label dialog.
    pub fn from_store(store: &SettingsStore) -> Self {
        Self {
            format: store.get_enum(keys::LABGEN_FORMAT, LabelFormat::default()),
            include_auto_labels: store.get_bool(keys::LABGEN_INCLUDE_AUTO, false),
        }
    }
}

pub struct LabelFileGenerator<'a> {
    symbols: &'a [Symbol],
    options: LabelGenOptions,
}

impl<'a> LabelFileGenerator<'a> {
    pub fn new(symbols: &'a [Symbol], options: LabelGenOptions) -> Self {
        Self { symbols, options }
    }

    fn includes(&self, symbol: &Symbol) -> bool {
        match symbol.source {
            SymbolSource::User | SymbolSource::AddrPreLabel => true,
            SymbolSource::Auto => self.options.include_auto_labels,
            SymbolSource::Project | SymbolSource::Platform | SymbolSource::Variable => false,
        }
    }

    /// Symbols that go in the file, sorted by label.
    pub fn selected_symbols(&self) -> Vec<&'a Symbol> {
        let mut selected: Vec<&Symbol> = self
            .symbols
            .iter()
            .filter(|symbol| self.includes(symbol))
            .collect();
        selected.sort_by(|a, b| compare_labels(&a.label, &b.label));
        selected
    }

    pub fn format_line(&self, symbol: &Symbol) -> String {
        let label = symbol.label.replace(UNIQUE_TAG_CHAR, "_");
        match self.options.format {
            // VICE keeps one copy of each label and rejects names that start
            // with a letter, hence the cc65-style '.' and '@' prefixes.
            LabelFormat::Vice => {
                let label = if symbol.non_unique {
                    format!("@{label}")
                } else {
                    label
                };
                format!("al {:06x} .{label}", symbol.value)
            }
            LabelFormat::Acme => {
                let label = if symbol.non_unique {
                    format!(".{label}")
                } else {
                    label
                };
                format!("{label} = ${:04x}", symbol.value)
            }
        }
    }

    /// Writes one line per selected symbol. Returns the number written.
    pub fn generate<W: Write>(&self, out: &mut W) -> Result<usize, LabelGenError> {
        let selected = self.selected_symbols();
        for symbol in &selected {
            writeln!(out, "{}", self.format_line(symbol))?;
        }
        out.flush()?;
        Ok(selected.len())
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
