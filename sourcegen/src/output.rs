use settings::AppSettings;
use sourcegen_core::dialogs::AboutBox;
use sourcegen_core::labels::LabelGenOptions;
use sourcegen_core::vis::VisualizationSet;
use std::path::Path;

pub fn print_info(message: &str) {
    println!("[SourceGen][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[SourceGen][ERROR]: {message}");
}

pub fn print_settings(settings: &AppSettings, path: Option<&Path>) {
    if let Some(path) = path {
        print_info(&format!("Settings file: {}", path.display()));
    }
    if settings.is_empty() {
        print_info("No settings stored");
    } else {
        print_info("Settings:");
        for (name, value) in settings.entries() {
            println!("{name}: {value}");
        }
    }
}

pub fn print_label_options(options: &LabelGenOptions) {
    print_info("Label file options:");
    println!("format: {} ({})", options.format, options.format.display_name());
    println!("include_auto_labels: {}", options.include_auto_labels);
}

pub fn print_vis_set(set: &VisualizationSet) {
    let items = if set.len() == 1 { "item" } else { "items" };
    print_info(&format!("{} - {} {}", set.label(), set.len(), items));
    for (index, vis) in set.into_iter().enumerate() {
        println!("[{index}] {} (#{}, {})", vis.tag(), vis.serial(), vis.generator());
    }
}

pub fn print_about(about: &AboutBox) {
    print_info(&format!("SourceGen v{}", about.program_version()));
    println!("{}", about.os_platform());
    if about.debug_notice_visible() {
        println!("Debug build: assertions are enabled");
    }
    println!();
    println!("{}", about.legal_text());
}
