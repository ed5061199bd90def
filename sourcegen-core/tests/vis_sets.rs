use sourcegen_core::dialog::ConfirmError;
use sourcegen_core::dialogs::edit_vis_set::PLACEHOLDER_LABEL;
use sourcegen_core::dialogs::{EditVisualizationSet, VisSetEditResult, VisSetRejection};
use sourcegen_core::vis::{trim_and_validate_tag, Visualization, VisualizationSet};
use sourcegen_core::{run_editor, DialogOutcome, DialogSession, DialogState};
use std::cell::RefCell;
use std::rc::Rc;

fn vis(serial: u32, tag: &str) -> Visualization {
    Visualization::new(serial, tag, "bitmap").expect("valid tag")
}

fn bank1() -> VisualizationSet {
    VisualizationSet::new("Bank1", vec![vis(1, "sprite1"), vis(2, "sprite2"), vis(3, "font")])
        .expect("non-blank label")
}

#[test]
fn cleared_label_yields_no_set() {
    let existing = bank1();
    let outcome = run_editor(EditVisualizationSet::new(Some(&existing)), |session| {
        session.dialog_mut().set_label("");
        session.confirm().unwrap();
    });
    assert_eq!(
        outcome,
        DialogOutcome::Accepted(VisSetEditResult {
            new_set: None,
            removed_serials: Vec::new(),
        })
    );
    assert_eq!(existing, bank1());
}

#[test]
fn whitespace_label_yields_no_set() {
    let outcome = run_editor(EditVisualizationSet::new(None), |session| {
        session.dialog_mut().set_label("   \t ");
        session.confirm().unwrap();
    });
    let result = outcome.accepted().expect("accepted");
    assert!(result.new_set.is_none());
}

#[test]
fn create_with_label() {
    let outcome = run_editor(EditVisualizationSet::new(None), |session| {
        assert_eq!(session.dialog().label(), PLACEHOLDER_LABEL);
        session.dialog_mut().set_label("  Widgets ");
        session.dialog_mut().add(vis(10, "w1"));
        session.confirm().unwrap();
    });
    let set = outcome.accepted().and_then(|r| r.new_set).expect("set");
    assert_eq!(set.label(), "Widgets");
    assert_eq!(set.len(), 1);
    assert_eq!(set.find_by_tag("w1").map(Visualization::serial), Some(10));
}

#[test]
fn cancel_returns_no_result() {
    let existing = bank1();
    let outcome = run_editor(EditVisualizationSet::new(Some(&existing)), |session| {
        session.dialog_mut().remove(0);
        session.dialog_mut().set_label("Bank2");
        session.cancel().unwrap();
    });
    assert_eq!(outcome, DialogOutcome::Cancelled);
    assert_eq!(existing, bank1());
}

#[test]
fn remove_records_serials_and_keeps_selection() {
    let existing = bank1();
    let mut editor = EditVisualizationSet::new(Some(&existing));
    assert_eq!(editor.selected_index(), Some(0));

    assert!(editor.select(Some(1)));
    let removed = editor.remove(1).expect("in range");
    assert_eq!(removed.tag(), "sprite2");
    assert_eq!(editor.selected_index(), Some(1));

    editor.remove(1);
    assert_eq!(editor.selected_index(), Some(0));
    editor.remove(0);
    assert_eq!(editor.selected_index(), None);
    assert!(!editor.can_remove());
    assert!(editor.remove(0).is_none());
    assert_eq!(editor.removed_serials(), &[2, 3, 1]);

    let mut session = DialogSession::open(editor);
    session.confirm().unwrap();
    let result = session.finish().accepted().expect("accepted");
    let set = result.new_set.expect("label kept");
    assert!(set.is_empty());
    assert_eq!(result.removed_serials, vec![2, 3, 1]);
}

#[test]
fn move_up_and_down() {
    let existing = bank1();
    let mut editor = EditVisualizationSet::new(Some(&existing));
    assert!(!editor.can_move_up());
    assert!(editor.can_move_down());
    assert!(!editor.move_up(0));

    assert!(editor.move_down(0));
    assert_eq!(editor.selected_index(), Some(1));
    assert!(editor.can_move_up());
    assert!(editor.move_down(1));
    assert!(!editor.can_move_down());
    assert!(!editor.move_down(2));

    assert!(editor.move_up(2));
    let tags: Vec<_> = editor.items().iter().map(Visualization::tag).collect();
    assert_eq!(tags, vec!["sprite2", "sprite1", "font"]);
}

#[test]
fn duplicate_tags_keep_dialog_open() {
    let mut session = DialogSession::open(EditVisualizationSet::new(None));
    session.dialog_mut().add(vis(1, "dup"));
    session.dialog_mut().add(vis(2, "dup"));
    assert_eq!(
        session.confirm(),
        Err(ConfirmError::Rejected(VisSetRejection::DuplicateTag(
            "dup".to_string()
        )))
    );
    assert_eq!(session.state(), DialogState::Open);

    let renamed = session.dialog().items()[1].with_tag("dup2").expect("valid");
    assert!(session.dialog_mut().replace(1, renamed));
    session.confirm().unwrap();
    assert!(session.finish().is_accepted());
}

#[test]
fn has_changes_tracks_edits() {
    let existing = bank1();
    let mut editor = EditVisualizationSet::new(Some(&existing));
    assert!(!editor.has_changes());
    editor.set_label(" Bank1 ");
    assert!(!editor.has_changes());
    editor.move_down(0);
    assert!(editor.has_changes());
    editor.move_up(1);
    assert!(!editor.has_changes());

    let mut fresh = EditVisualizationSet::new(None);
    assert!(!fresh.has_changes());
    fresh.set_label("Other");
    assert!(fresh.has_changes());
}

#[test]
fn editor_notifies_properties() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut editor = EditVisualizationSet::new(None);
    editor
        .notifier_mut()
        .subscribe(move |name| sink.borrow_mut().push(name.to_string()));

    editor.set_label("Gfx");
    editor.add(vis(4, "tile"));
    assert_eq!(
        *seen.borrow(),
        vec![
            EditVisualizationSet::LABEL.to_string(),
            EditVisualizationSet::ITEMS.to_string(),
            EditVisualizationSet::SELECTION.to_string(),
        ]
    );
}

#[test]
fn tags_are_trimmed_and_validated() {
    assert_eq!(trim_and_validate_tag("  ab "), Some("ab"));
    assert_eq!(trim_and_validate_tag(" a "), None);
    assert!(Visualization::new(1, "", "bitmap").is_none());
    assert_eq!(vis(1, " sprite ").tag(), "sprite");
}

#[test]
fn set_file_round_trip_and_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bank1.json");
    bank1().save_to_file(&path).unwrap();
    let loaded = VisualizationSet::load_from_file(&path).unwrap();
    assert_eq!(loaded, bank1());

    std::fs::write(&path, r#"{"label": "  ", "items": []}"#).unwrap();
    assert!(VisualizationSet::load_from_file(&path).is_err());

    std::fs::write(&path, r#"{"label": "Gfx"}"#).unwrap();
    let empty = VisualizationSet::load_from_file(&path).unwrap();
    assert!(empty.is_empty());

    std::fs::write(
        &path,
        r#"{"label": "Gfx", "items": [{"serial": 1, "tag": "x", "generator": "g"}]}"#,
    )
    .unwrap();
    assert!(VisualizationSet::load_from_file(&path).is_err());
}
