//! Dialogs:
//! - `about`: program version, legal text, web site link
//! - `edit_vis_set`: visualization set editor
//! - `generate_labels`: label file options

pub mod about;
pub mod edit_vis_set;
pub mod generate_labels;

pub use about::{AboutBox, SystemUrlLauncher, UrlLauncher};
pub use edit_vis_set::{EditVisualizationSet, VisSetEditResult, VisSetRejection};
pub use generate_labels::GenerateLabels;
