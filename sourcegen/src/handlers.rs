use crate::commands::*;
use crate::config;
use crate::output::*;
use sourcegen_core::dialogs::{
    AboutBox, EditVisualizationSet, GenerateLabels, SystemUrlLauncher, VisSetEditResult,
};
use sourcegen_core::labels::{LabelFileGenerator, LabelGenOptions, Symbol};
use sourcegen_core::vis::{trim_and_validate_tag, Visualization, VisualizationSet};
use sourcegen_core::{run_editor, DialogOutcome, DialogSession, SettingsStore};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn handle_command(cli: Cli) -> CliResult {
    let settings_path = config::settings_path(cli.settings);
    match cli.command {
        Commands::Settings { command } => {
            handle_settings_command(command, SettingsStore::open(settings_path))
        }
        Commands::Labels { command } => {
            handle_labels_command(command, SettingsStore::open(settings_path))
        }
        Commands::VisSet { command } => handle_vis_set_command(command),
        Commands::About { web } => {
            let about = AboutBox::open(&config::runtime_data(cli.runtime_data));
            print_about(&about);
            if web {
                about.visit_web_site(&SystemUrlLauncher);
            }
            Ok(())
        }
    }
}

fn handle_settings_command(command: SettingsCommands, mut store: SettingsStore) -> CliResult {
    match command {
        SettingsCommands::List => print_settings(store.settings(), store.path()),
        SettingsCommands::Get { key } => {
            if store.settings().contains(&key) {
                println!("{}", store.get_string(&key, ""));
            } else {
                print_error(&format!("No setting named '{key}'"));
            }
        }
        SettingsCommands::Set { key, value } => {
            store.set_string(&key, Some(&value));
            store.flush()?;
            print_info(&format!("{key} = {value}"));
        }
        SettingsCommands::Remove { key } => {
            if store.settings().contains(&key) {
                store.set_string(&key, None);
                store.flush()?;
                print_info(&format!("Removed {key}"));
            } else {
                print_error(&format!("No setting named '{key}'"));
            }
        }
    }
    Ok(())
}

fn handle_labels_command(command: LabelsCommands, mut store: SettingsStore) -> CliResult {
    match command {
        LabelsCommands::Options {
            format,
            include_auto,
            cancel,
        } => {
            let outcome = run_editor(GenerateLabels::new(&mut store), |session| {
                let dialog = session.dialog_mut();
                if let Some(format) = format {
                    dialog.select_format(format);
                }
                if let Some(include) = include_auto {
                    dialog.set_include_auto_labels(include);
                }
                if cancel {
                    let _ = session.cancel();
                } else {
                    let _ = session.confirm();
                }
            });
            match outcome {
                DialogOutcome::Accepted(options) => print_label_options(&options),
                DialogOutcome::Cancelled => print_info("Cancelled; label options unchanged"),
            }
        }
        LabelsCommands::Generate { symbols, out } => {
            let data = std::fs::read(&symbols)?;
            let symbols: Vec<Symbol> = serde_json::from_slice(&data)?;
            let generator = LabelFileGenerator::new(&symbols, LabelGenOptions::from_store(&store));
            match out {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    let count = generator.generate(&mut writer)?;
                    print_info(&format!("Wrote {count} labels to {}", path.display()));
                }
                None => {
                    generator.generate(&mut io::stdout().lock())?;
                }
            }
        }
    }
    Ok(())
}

fn handle_vis_set_command(command: VisSetCommands) -> CliResult {
    let VisSetCommands::Edit {
        file,
        out,
        label,
        remove,
        move_up,
        move_down,
        add,
        generator,
        cancel,
    } = command;

    let existing = match &file {
        Some(path) if path.exists() => Some(VisualizationSet::load_from_file(path)?),
        _ => None,
    };
    let first_serial = match existing
        .iter()
        .flat_map(|set| set.items())
        .map(Visualization::serial)
        .max()
    {
        Some(max) => max.checked_add(1),
        None => Some(0),
    };
    let mut serials = first_serial.into_iter().flat_map(|first| first..=u32::MAX);
    let mut out_of_serials = false;

    let outcome = run_editor(EditVisualizationSet::new(existing.as_ref()), |session| {
        let editor = session.dialog_mut();
        if let Some(label) = &label {
            editor.set_label(label.as_str());
        }

        // Highest index first so each index refers to the list as loaded.
        let mut remove = remove;
        remove.sort_unstable_by(|a, b| b.cmp(a));
        remove.dedup();
        for index in remove {
            if editor.remove(index).is_none() {
                print_error(&format!("No item at index {index}"));
            }
        }
        if let Some(index) = move_up {
            if !editor.move_up(index) {
                print_error(&format!("Can't move item {index} up"));
            }
        }
        if let Some(index) = move_down {
            if !editor.move_down(index) {
                print_error(&format!("Can't move item {index} down"));
            }
        }
        for tag in &add {
            if trim_and_validate_tag(tag).is_none() {
                print_error(&format!(
                    "Invalid tag '{tag}': must be at least {} characters",
                    Visualization::MIN_TAG_LEN
                ));
                continue;
            }
            let Some(serial) = serials.next() else {
                out_of_serials = true;
                break;
            };
            if let Some(vis) = Visualization::new(serial, tag, &generator) {
                editor.add(vis);
            }
        }
        if out_of_serials {
            let _ = session.cancel();
            return;
        }
        finish_edit(session, cancel);
    });

    if out_of_serials {
        return Err("no serial numbers left for new visualizations; set left unchanged".into());
    }
    match outcome {
        DialogOutcome::Cancelled => print_info("Edit cancelled"),
        DialogOutcome::Accepted(result) => {
            store_edit_result(result, out.or(file).as_deref())?;
        }
    }
    Ok(())
}

fn finish_edit(session: &mut DialogSession<EditVisualizationSet>, cancel: bool) {
    if cancel {
        let _ = session.cancel();
        return;
    }
    // A rejected edit leaves the dialog open, so closing it below cancels.
    if let Err(err) = session.confirm() {
        print_error(&err.to_string());
    }
}

fn store_edit_result(result: VisSetEditResult, target: Option<&Path>) -> CliResult {
    if !result.removed_serials.is_empty() {
        let serials: Vec<String> = result
            .removed_serials
            .iter()
            .map(u32::to_string)
            .collect();
        print_info(&format!("Removed visualizations: {}", serials.join(", ")));
    }
    match (result.new_set, target) {
        (Some(set), Some(path)) => {
            set.save_to_file(path)?;
            print_vis_set(&set);
            print_info(&format!("Saved to {}", path.display()));
        }
        (Some(set), None) => {
            println!("{}", serde_json::to_string_pretty(&set)?);
        }
        (None, target) => {
            if let Some(path) = target.filter(|path| path.exists()) {
                std::fs::remove_file(path)?;
                print_info(&format!("Label is blank; deleted {}", path.display()));
            } else {
                print_info("Label is blank; no set created");
            }
        }
    }
    Ok(())
}

