use crate::dialog::Dialog;
use crate::notify::PropertyNotifier;
use crate::vis::{Visualization, VisualizationSet};
use std::collections::HashSet;

/// Label shown when creating a set from scratch.
pub const PLACEHOLDER_LABEL: &str = "New Set";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VisSetRejection {
    #[error("tag '{0}' is used by more than one visualization")]
    DuplicateTag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisSetEditResult {
    /// `None` when the label was left blank: the caller should drop the set.
    pub new_set: Option<VisualizationSet>,
    /// Serial numbers of the items removed during the edit, for fixing up
    /// anything elsewhere that refers to them.
    pub removed_serials: Vec<u32>,
}

/// Visualization set editor.
///
/// Works on copies: the set passed to [`EditVisualizationSet::new`] is never
/// modified, and confirm always builds a fresh one.
#[derive(Debug)]
pub struct EditVisualizationSet {
    original: Option<VisualizationSet>,
    label: String,
    items: Vec<Visualization>,
    selected: Option<usize>,
    removed_serials: Vec<u32>,
    notifier: PropertyNotifier,
}

impl EditVisualizationSet {
    pub const LABEL: &'static str = "label";
    pub const ITEMS: &'static str = "items";
    pub const SELECTION: &'static str = "selection";

    pub fn new(existing: Option<&VisualizationSet>) -> Self {
        let (label, items) = match existing {
            Some(set) => (set.label().to_string(), set.items().to_vec()),
            None => (PLACEHOLDER_LABEL.to_string(), Vec::new()),
        };
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            original: existing.cloned(),
            label,
            items,
            selected,
            removed_serials: Vec::new(),
            notifier: PropertyNotifier::new(),
        }
    }

    pub fn notifier_mut(&mut self) -> &mut PropertyNotifier {
        &mut self.notifier
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.notifier.notify(Self::LABEL);
    }

    pub fn items(&self) -> &[Visualization] {
        &self.items
    }

    pub fn removed_serials(&self) -> &[u32] {
        &self.removed_serials
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns false, leaving the selection alone, if `index` is out of range.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        if matches!(index, Some(idx) if idx >= self.items.len()) {
            return false;
        }
        self.set_selected(index);
        true
    }

    fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index;
        self.notifier.notify(Self::SELECTION);
    }

    pub fn can_remove(&self) -> bool {
        self.selected.is_some()
    }

    pub fn can_move_up(&self) -> bool {
        matches!(self.selected, Some(idx) if idx > 0)
    }

    pub fn can_move_down(&self) -> bool {
        matches!(self.selected, Some(idx) if idx + 1 < self.items.len())
    }

    /// Appends an item and selects it.
    pub fn add(&mut self, vis: Visualization) {
        self.items.push(vis);
        self.notifier.notify(Self::ITEMS);
        self.set_selected(Some(self.items.len() - 1));
    }

    /// Swaps in an edited copy of the item at `index`.
    pub fn replace(&mut self, index: usize, vis: Visualization) -> bool {
        let Some(slot) = self.items.get_mut(index) else {
            return false;
        };
        *slot = vis;
        self.notifier.notify(Self::ITEMS);
        self.set_selected(Some(index));
        true
    }

    /// Removes the item at `index`. The selection stays at the same position
    /// unless the last item was removed.
    pub fn remove(&mut self, index: usize) -> Option<Visualization> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.removed_serials.push(removed.serial());
        self.notifier.notify(Self::ITEMS);

        let next = if self.items.is_empty() {
            None
        } else {
            Some(index.min(self.items.len() - 1))
        };
        self.set_selected(next);
        Some(removed)
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.swap(index - 1, index);
        self.notifier.notify(Self::ITEMS);
        self.set_selected(Some(index - 1));
        true
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.items.len() {
            return false;
        }
        self.items.swap(index, index + 1);
        self.notifier.notify(Self::ITEMS);
        self.set_selected(Some(index + 1));
        true
    }

    fn build_set(&self) -> Option<VisualizationSet> {
        VisualizationSet::new(&self.label, self.items.clone())
    }

    /// Whether closing without confirming would lose edits.
    pub fn has_changes(&self) -> bool {
        match &self.original {
            Some(original) => self.build_set().as_ref() != Some(original),
            None => self.label.trim() != PLACEHOLDER_LABEL || !self.items.is_empty(),
        }
    }

    fn find_duplicate_tag(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Visualization::tag)
            .find(|tag| !seen.insert(*tag))
    }
}

impl Dialog for EditVisualizationSet {
    type Output = VisSetEditResult;
    type Rejection = VisSetRejection;

    fn confirm(&mut self) -> Result<Self::Output, Self::Rejection> {
        if let Some(tag) = self.find_duplicate_tag() {
            return Err(VisSetRejection::DuplicateTag(tag.to_string()));
        }
        let new_set = self.build_set();
        if new_set.is_none() {
            log::debug!("Visualization set label is blank; no set produced");
        }
        Ok(VisSetEditResult {
            new_set,
            removed_serials: self.removed_serials.clone(),
        })
    }
}
