use sourcegen_core::dialogs::about::{LEGAL_STUFF_FILE_NAME, WEB_SITE_URL};
use sourcegen_core::dialogs::{AboutBox, UrlLauncher};
use sourcegen_core::runtime_data::RuntimeData;
use std::cell::RefCell;
use std::io;

#[derive(Default)]
struct RecordingLauncher {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl UrlLauncher for RecordingLauncher {
    fn open_url(&self, url: &str) -> io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        } else {
            Ok(())
        }
    }
}

#[test]
fn shows_legal_text_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(LEGAL_STUFF_FILE_NAME), "Copyright notice\n").unwrap();
    let about = AboutBox::open(&RuntimeData::new(dir.path().to_path_buf()));
    assert_eq!(about.legal_text(), "Copyright notice\n");
    assert_eq!(about.program_version(), env!("CARGO_PKG_VERSION"));
    assert!(about.os_platform().starts_with("OS: "));
}

#[test]
fn shows_error_text_when_file_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let about = AboutBox::open(&RuntimeData::new(dir.path().to_path_buf()));
    assert!(about.legal_text().starts_with("failed to read '"));
    assert!(about.legal_text().contains(LEGAL_STUFF_FILE_NAME));
}

#[test]
fn shows_error_text_without_runtime_data() {
    let about = AboutBox::open(&RuntimeData::default());
    assert_eq!(about.legal_text(), "unable to find the RuntimeData directory");
}

#[test]
fn visit_web_site_uses_launcher() {
    let about = AboutBox::open(&RuntimeData::default());
    let launcher = RecordingLauncher::default();
    about.visit_web_site(&launcher);
    assert_eq!(*launcher.opened.borrow(), vec![WEB_SITE_URL.to_string()]);

    let failing = RecordingLauncher {
        fail: true,
        ..Default::default()
    };
    about.visit_web_site(&failing);
    assert_eq!(failing.opened.borrow().len(), 1);
}

