use std::path::{Path, PathBuf};

pub const RUNTIME_DATA_DIR_NAME: &str = "RuntimeData";

#[derive(thiserror::Error, Debug)]
pub enum RuntimeDataError {
    #[error("unable to find the RuntimeData directory")]
    NotFound,
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Access to the static files shipped next to the executable.
#[derive(Debug, Clone, Default)]
pub struct RuntimeData {
    base: Option<PathBuf>,
}

impl RuntimeData {
    pub fn new(base: PathBuf) -> Self {
        Self { base: Some(base) }
    }

    /// Looks for the data directory beside the executable, then two levels up
    /// (a `target/debug` build run from the source tree).
    pub fn locate() -> Self {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(err) => {
                log::warn!("Unable to resolve executable path: {err}");
                return Self::default();
            }
        };
        let Some(exe_dir) = exe.parent() else {
            return Self::default();
        };
        let candidates = [
            Some(exe_dir.join(RUNTIME_DATA_DIR_NAME)),
            exe_dir
                .parent()
                .and_then(Path::parent)
                .map(|up_two| up_two.join(RUNTIME_DATA_DIR_NAME)),
        ];
        for candidate in candidates.into_iter().flatten() {
            if candidate.is_dir() {
                return Self::new(candidate);
            }
        }
        log::warn!(
            "Unable to find {RUNTIME_DATA_DIR_NAME} dir near {}",
            exe.display()
        );
        Self::default()
    }

    pub fn path_for(&self, file_name: &str) -> Option<PathBuf> {
        self.base.as_ref().map(|base| base.join(file_name))
    }

    pub fn read_text(&self, file_name: &str) -> Result<String, RuntimeDataError> {
        let path = self.path_for(file_name).ok_or(RuntimeDataError::NotFound)?;
        std::fs::read_to_string(&path).map_err(|source| RuntimeDataError::Io { path, source })
    }
}
