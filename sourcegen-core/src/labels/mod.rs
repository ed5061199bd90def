pub mod format;
pub mod generator;

pub use format::{FormatSelector, LabelFormat};
pub use generator::{LabelFileGenerator, LabelGenOptions, Symbol, SymbolSource, UNIQUE_TAG_CHAR};

#[derive(thiserror::Error, Debug)]
pub enum LabelGenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown label format '{0}'")]
    UnknownFormat(String),
}
