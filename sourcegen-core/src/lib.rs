pub mod dialog;
pub mod dialogs;
pub mod labels;
pub mod notify;
pub mod runtime_data;
pub mod store;
pub mod vis;

pub use dialog::{run_editor, Dialog, DialogOutcome, DialogSession, DialogState};
pub use store::SettingsStore;
