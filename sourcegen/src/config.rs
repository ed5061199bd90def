use log::LevelFilter;
use simple_logger::SimpleLogger;
use sourcegen_core::runtime_data::RuntimeData;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "sourcegen";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// `RUST_LOG` overrides the level chosen here.
pub fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).env().init()
}

pub fn settings_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(SETTINGS_FILE_NAME)
    })
}

pub fn runtime_data(flag: Option<PathBuf>) -> RuntimeData {
    match flag {
        Some(dir) => RuntimeData::new(dir),
        None => RuntimeData::locate(),
    }
}
