use crate::runtime_data::RuntimeData;

pub const LEGAL_STUFF_FILE_NAME: &str = "LegalStuff.txt";
pub const WEB_SITE_URL: &str = "https://6502bench.com/";

/// Hands a URL to whatever the host uses to open links.
pub trait UrlLauncher {
    fn open_url(&self, url: &str) -> std::io::Result<()>;
}

pub struct SystemUrlLauncher;

impl UrlLauncher for SystemUrlLauncher {
    fn open_url(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// "About" box contents.
#[derive(Debug, Clone)]
pub struct AboutBox {
    legal_text: String,
}

impl AboutBox {
    /// Reads the legal text. If that fails the error description is shown in
    /// its place.
    pub fn open(runtime_data: &RuntimeData) -> Self {
        let legal_text = match runtime_data.read_text(LEGAL_STUFF_FILE_NAME) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{err}");
                err.to_string()
            }
        };
        Self { legal_text }
    }

    pub fn program_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn os_platform(&self) -> String {
        format!(
            "OS: {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }

    /// Debug builds show a note that assertions are enabled.
    pub fn debug_notice_visible(&self) -> bool {
        cfg!(debug_assertions)
    }

    pub fn legal_text(&self) -> &str {
        &self.legal_text
    }

    pub fn visit_web_site(&self, launcher: &dyn UrlLauncher) {
        if let Err(err) = launcher.open_url(WEB_SITE_URL) {
            log::error!("Failed to open URL {WEB_SITE_URL}: {err}");
        }
    }
}
