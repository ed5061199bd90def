use sourcegen_core::dialog::{ConfirmError, DialogError};
use sourcegen_core::{run_editor, Dialog, DialogOutcome, DialogSession, DialogState};

/// Accepts any name of at least three characters.
struct NameDialog {
    name: String,
    confirms: usize,
}

impl NameDialog {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            confirms: 0,
        }
    }
}

impl Dialog for NameDialog {
    type Output = String;
    type Rejection = String;

    fn confirm(&mut self) -> Result<String, String> {
        self.confirms += 1;
        if self.name.len() < 3 {
            Err(format!("'{}' is too short", self.name))
        } else {
            Ok(self.name.clone())
        }
    }
}

#[test]
fn cancel_before_confirm_is_cancelled() {
    let outcome = run_editor(NameDialog::new("valid name"), |session| {
        session.cancel().unwrap();
    });
    assert_eq!(outcome, DialogOutcome::Cancelled);
}

#[test]
fn closing_without_action_is_cancelled() {
    let outcome = run_editor(NameDialog::new("valid name"), |_| {});
    assert!(outcome.is_cancelled());
    assert_eq!(outcome.accepted(), None);
}

#[test]
fn valid_confirm_is_accepted() {
    let outcome = run_editor(NameDialog::new("abc"), |session| {
        session.confirm().unwrap();
    });
    assert_eq!(outcome, DialogOutcome::Accepted("abc".to_string()));
}

#[test]
fn rejected_confirm_stays_open() {
    let mut session = DialogSession::open(NameDialog::new("ab"));
    let err = session.confirm().unwrap_err();
    assert_eq!(err, ConfirmError::Rejected("'ab' is too short".to_string()));
    assert_eq!(err.to_string(), "'ab' is too short");
    assert_eq!(session.state(), DialogState::Open);

    session.dialog_mut().name = "abcd".to_string();
    session.confirm().unwrap();
    assert_eq!(session.state(), DialogState::Accepted);
    assert_eq!(session.dialog().confirms, 2);
    assert_eq!(session.finish().accepted(), Some("abcd".to_string()));
}

#[test]
fn rejected_then_closed_is_cancelled() {
    let outcome = run_editor(NameDialog::new("x"), |session| {
        assert!(session.confirm().is_err());
    });
    assert!(outcome.is_cancelled());
}

#[test]
fn terminal_states_refuse_further_actions() {
    let mut accepted = DialogSession::open(NameDialog::new("abc"));
    accepted.confirm().unwrap();
    assert_eq!(accepted.confirm(), Err(ConfirmError::Closed));
    assert_eq!(accepted.cancel(), Err(DialogError::Closed));
    assert_eq!(accepted.state(), DialogState::Accepted);
    assert_eq!(accepted.dialog().confirms, 1);

    let mut cancelled = DialogSession::open(NameDialog::new("abc"));
    cancelled.cancel().unwrap();
    assert_eq!(cancelled.confirm(), Err(ConfirmError::Closed));
    assert_eq!(cancelled.dialog().confirms, 0);
    assert!(cancelled.state().is_terminal());
    assert!(cancelled.finish().is_cancelled());
}

#[test]
fn outcome_map() {
    let outcome = DialogOutcome::Accepted(2).map(|v| v * 10);
    assert_eq!(outcome, DialogOutcome::Accepted(20));
    let cancelled: DialogOutcome<i32> = DialogOutcome::Cancelled;
    assert_eq!(cancelled.map(|v| v * 10), DialogOutcome::Cancelled);
}
