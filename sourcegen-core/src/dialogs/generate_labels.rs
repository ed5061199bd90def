use crate::dialog::Dialog;
use crate::labels::{FormatSelector, LabelFormat, LabelGenOptions};
use crate::notify::PropertyNotifier;
use crate::store::SettingsStore;
use settings::keys;
use std::convert::Infallible;

/// Options for label file generation.
///
/// Fields start from the last confirmed values in the settings store; confirm
/// writes them back.
pub struct GenerateLabels<'a> {
    store: &'a mut SettingsStore,
    selector: FormatSelector,
    include_auto_labels: bool,
    notifier: PropertyNotifier,
}

impl<'a> GenerateLabels<'a> {
    pub const INCLUDE_AUTO_LABELS: &'static str = "include_auto_labels";

    pub fn new(store: &'a mut SettingsStore) -> Self {
        let selector = FormatSelector::from_store(store);
        let include_auto_labels = store.get_bool(keys::LABGEN_INCLUDE_AUTO, false);
        Self {
            store,
            selector,
            include_auto_labels,
            notifier: PropertyNotifier::new(),
        }
    }

    pub fn notifier_mut(&mut self) -> &mut PropertyNotifier {
        &mut self.notifier
    }

    pub fn format(&self) -> LabelFormat {
        self.selector.current()
    }

    pub fn selector(&self) -> &FormatSelector {
        &self.selector
    }

    pub fn is_format_selected(&self, format: LabelFormat) -> bool {
        self.selector.is_selected(format)
    }

    pub fn select_format(&mut self, format: LabelFormat) {
        self.selector.select(format, &mut self.notifier);
    }

    pub fn set_format_selected(&mut self, format: LabelFormat, selected: bool) {
        self.selector
            .set_selected(format, selected, &mut self.notifier);
    }

    pub fn include_auto_labels(&self) -> bool {
        self.include_auto_labels
    }

    pub fn set_include_auto_labels(&mut self, include: bool) {
        self.include_auto_labels = include;
        self.notifier.notify(Self::INCLUDE_AUTO_LABELS);
    }
}

impl Dialog for GenerateLabels<'_> {
    type Output = LabelGenOptions;
    type Rejection = Infallible;

    fn confirm(&mut self) -> Result<Self::Output, Self::Rejection> {
        self.selector.persist(self.store);
        self.store
            .set_bool(keys::LABGEN_INCLUDE_AUTO, self.include_auto_labels);
        self.store.flush_logged();
        Ok(LabelGenOptions {
            format: self.selector.current(),
            include_auto_labels: self.include_auto_labels,
        })
    }
}
