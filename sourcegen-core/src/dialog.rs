//! Completion protocol shared by the editor dialogs.
//!
//! A dialog starts `Open` and ends in exactly one of `Accepted` or
//! `Cancelled`. The result only exists inside [`DialogOutcome::Accepted`], so
//! a caller cannot read it without first learning that the dialog was
//! accepted. A session is single-use; editing again needs a new dialog.

use std::fmt;

/// An editor whose confirm action validates its fields and builds a result.
pub trait Dialog {
    type Output;
    type Rejection: fmt::Debug + fmt::Display;

    /// Validates the current fields. `Err` keeps the dialog open.
    fn confirm(&mut self) -> Result<Self::Output, Self::Rejection>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    Accepted(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DialogOutcome::Accepted(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogOutcome::Cancelled)
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            DialogOutcome::Accepted(value) => Some(value),
            DialogOutcome::Cancelled => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> DialogOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            DialogOutcome::Accepted(value) => DialogOutcome::Accepted(f(value)),
            DialogOutcome::Cancelled => DialogOutcome::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Accepted,
    Cancelled,
}

impl DialogState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, DialogState::Open)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    #[error("dialog is already closed")]
    Closed,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfirmError<R>
where
    R: fmt::Debug + fmt::Display,
{
    #[error("dialog is already closed")]
    Closed,
    #[error("{0}")]
    Rejected(R),
}

pub struct DialogSession<D: Dialog> {
    dialog: D,
    state: DialogState,
    output: Option<D::Output>,
}

impl<D: Dialog> DialogSession<D> {
    pub fn open(dialog: D) -> Self {
        Self {
            dialog,
            state: DialogState::Open,
            output: None,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut D {
        &mut self.dialog
    }

    pub fn confirm(&mut self) -> Result<(), ConfirmError<D::Rejection>> {
        if self.state.is_terminal() {
            return Err(ConfirmError::Closed);
        }
        match self.dialog.confirm() {
            Ok(output) => {
                self.output = Some(output);
                self.state = DialogState::Accepted;
                Ok(())
            }
            Err(rejection) => {
                log::debug!("Dialog input rejected: {rejection}");
                Err(ConfirmError::Rejected(rejection))
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), DialogError> {
        if self.state.is_terminal() {
            return Err(DialogError::Closed);
        }
        self.state = DialogState::Cancelled;
        Ok(())
    }

    /// Ends the session. A session that is still open was closed without
    /// confirming, which counts as a cancel.
    pub fn finish(self) -> DialogOutcome<D::Output> {
        match (self.state, self.output) {
            (DialogState::Accepted, Some(output)) => DialogOutcome::Accepted(output),
            _ => DialogOutcome::Cancelled,
        }
    }
}

/// Opens `dialog`, lets `drive` edit and confirm or cancel it, and returns the
/// terminal outcome.
pub fn run_editor<D, F>(dialog: D, drive: F) -> DialogOutcome<D::Output>
where
    D: Dialog,
    F: FnOnce(&mut DialogSession<D>),
{
    let mut session = DialogSession::open(dialog);
    drive(&mut session);
    let outcome = session.finish();
    log::info!(
        "Dialog {}",
        if outcome.is_accepted() {
            "accepted"
        } else {
            "cancelled"
        }
    );
    outcome
}
