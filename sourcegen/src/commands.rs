use clap::{Parser, Subcommand};
use sourcegen_core::labels::LabelFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sourcegen", version, about = "SourceGen settings and dialog CLI")]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
    /// Directory holding LegalStuff.txt and other shipped files
    #[arg(long, global = true)]
    pub runtime_data: Option<PathBuf>,
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    Labels {
        #[command(subcommand)]
        command: LabelsCommands,
    },
    VisSet {
        #[command(subcommand)]
        command: VisSetCommands,
    },
    About {
        /// Open the web site in the default browser
        #[arg(long)]
        web: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    List,
    Get { key: String },
    Set { key: String, value: String },
    Remove { key: String },
}

#[derive(Subcommand)]
pub enum LabelsCommands {
    /// Edit the label file options and save them
    Options {
        #[arg(long)]
        format: Option<LabelFormat>,
        #[arg(long)]
        include_auto: Option<bool>,
        /// Close the dialog without saving
        #[arg(long)]
        cancel: bool,
    },
    /// Write a label file for a symbol list using the saved options
    Generate {
        symbols: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum VisSetCommands {
    /// Create or edit a visualization set. Edits are applied in the order
    /// label, remove, move-up, move-down, add.
    Edit {
        /// Set to edit; a new set is created if omitted or missing
        #[arg(long)]
        file: Option<PathBuf>,
        /// Where to write the result (defaults to --file, else stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        label: Option<String>,
        /// Remove the item at this index; may be repeated
        #[arg(long)]
        remove: Vec<usize>,
        #[arg(long)]
        move_up: Option<usize>,
        #[arg(long)]
        move_down: Option<usize>,
        /// Append a visualization with this tag; may be repeated
        #[arg(long)]
        add: Vec<String>,
        #[arg(long, default_value = "bitmap")]
        generator: String,
        #[arg(long)]
        cancel: bool,
    },
}
