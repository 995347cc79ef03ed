//! Confirmation and input dialogs brokered through an injected handle.
//!
//! # Design
//! - [`DialogHandle`] is cloned into whoever needs to ask; the mounted [`DialogHost`] owns the queue.
//! - Each request carries a oneshot sender, so the caller awaits exactly one [`DialogOutcome`].
//! - Requests are shown one at a time in arrival order.
//! - A request dropped without an answer reads as [`DialogOutcome::Cancelled`].

use std::collections::VecDeque;

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use futures::channel::oneshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{UiError, UiResult};

const CONFIRM_LABEL: &str = "Confirmer";
const CANCEL_LABEL: &str = "Annuler";

/// Visual tone of a dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogTone {
    /// Destructive action.
    Danger,
    /// Risky action.
    Warning,
    /// Neutral question.
    #[default]
    Info,
}

impl DialogTone {
    /// Lowercase name, also used as the style modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Options for an input dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Value pre-filled in the field.
    pub default_value: String,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// Reject blank submissions.
    pub required: bool,
}

/// What the dialog asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogKind {
    /// Yes/no confirmation.
    Confirm,
    /// Free-text answer.
    AskForInput(InputOptions),
}

/// A dialog waiting to be shown or currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogRequest {
    /// Heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Visual tone.
    pub tone: DialogTone,
    /// Confirmation or input.
    pub kind: DialogKind,
    /// Label of the accepting button.
    pub confirm_label: String,
    /// Label of the dismissing button.
    pub cancel_label: String,
}

impl DialogRequest {
    fn new(title: String, message: String, tone: DialogTone, kind: DialogKind) -> Self {
        Self {
            title,
            message,
            tone,
            kind,
            confirm_label: CONFIRM_LABEL.to_string(),
            cancel_label: CANCEL_LABEL.to_string(),
        }
    }

    /// Input options when the dialog asks for text.
    #[must_use]
    pub const fn input(&self) -> Option<&InputOptions> {
        match &self.kind {
            DialogKind::AskForInput(options) => Some(options),
            DialogKind::Confirm => None,
        }
    }
}

/// How a dialog was closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The confirmation was accepted.
    Confirmed,
    /// The input dialog was submitted with this value.
    Submitted(String),
    /// The dialog was dismissed, or never answered.
    Cancelled,
}

/// Pending answer to one dialog.
#[derive(Debug)]
pub struct DialogReply {
    rx: oneshot::Receiver<DialogOutcome>,
}

impl DialogReply {
    /// Outcome if already decided, without waiting.
    pub fn try_outcome(&mut self) -> Option<DialogOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::Canceled) => Some(DialogOutcome::Cancelled),
        }
    }

    /// Wait for the outcome.
    pub async fn into_outcome(self) -> DialogOutcome {
        self.rx.await.unwrap_or(DialogOutcome::Cancelled)
    }
}

#[derive(Debug)]
struct PendingDialog {
    request: DialogRequest,
    reply: oneshot::Sender<DialogOutcome>,
}

/// Cloneable handle used to open dialogs.
#[derive(Clone, Debug)]
pub struct DialogHandle {
    tx: UnboundedSender<PendingDialog>,
}

impl DialogHandle {
    /// Ask the user to confirm an action.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the dialog host is gone.
    pub fn confirm(
        &self,
        tone: DialogTone,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> UiResult<DialogReply> {
        self.open(DialogRequest::new(
            title.into(),
            message.into(),
            tone,
            DialogKind::Confirm,
        ))
    }

    /// Ask the user to type a value.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the dialog host is gone.
    pub fn ask_for_input(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: InputOptions,
    ) -> UiResult<DialogReply> {
        self.open(DialogRequest::new(
            title.into(),
            message.into(),
            DialogTone::Info,
            DialogKind::AskForInput(options),
        ))
    }

    /// Queue a fully described request.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the dialog host is gone.
    pub fn open(&self, request: DialogRequest) -> UiResult<DialogReply> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .unbounded_send(PendingDialog { request, reply })
            .map_err(|_| UiError::HostUnavailable { host: "dialog" })?;
        Ok(DialogReply { rx })
    }
}

/// Receiving end owned by the dialog host.
#[derive(Debug)]
pub struct DialogInbox {
    rx: UnboundedReceiver<PendingDialog>,
}

/// Create a connected handle/inbox pair.
#[must_use]
pub fn dialog_channel() -> (DialogHandle, DialogInbox) {
    let (tx, rx) = unbounded();
    (DialogHandle { tx }, DialogInbox { rx })
}

/// Dialog queue owned by the mounted host.
#[derive(Debug, Default)]
pub struct DialogHost {
    queue: VecDeque<PendingDialog>,
}

impl DialogHost {
    /// Empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every request pending in `inbox`; returns how many arrived.
    #[allow(deprecated)]
    pub fn absorb(&mut self, inbox: &mut DialogInbox) -> usize {
        let mut added = 0;
        while let Ok(Some(pending)) = inbox.rx.try_next() {
            self.queue.push_back(pending);
            added += 1;
        }
        added
    }

    /// Dialog currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&DialogRequest> {
        self.queue.front().map(|pending| &pending.request)
    }

    /// Dialogs waiting, including the one shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Accept the current dialog; `false` when none is shown.
    pub fn confirm(&mut self) -> bool {
        self.resolve(DialogOutcome::Confirmed)
    }

    /// Dismiss the current dialog; `false` when none is shown.
    pub fn cancel(&mut self) -> bool {
        self.resolve(DialogOutcome::Cancelled)
    }

    /// Submit `value` to the current input dialog.
    ///
    /// A confirmation dialog treats submission as acceptance. Returns `false`
    /// when no dialog is shown.
    ///
    /// # Errors
    /// Returns [`UiError::InputRequired`] when the input is required and `value`
    /// is blank; the dialog stays open.
    pub fn submit(&mut self, value: &str) -> UiResult<bool> {
        let Some(request) = self.current() else {
            return Ok(false);
        };
        let outcome = match request.input() {
            Some(options) if options.required && value.trim().is_empty() => {
                return Err(UiError::InputRequired);
            }
            Some(_) => DialogOutcome::Submitted(value.to_string()),
            None => DialogOutcome::Confirmed,
        };
        Ok(self.resolve(outcome))
    }

    fn resolve(&mut self, outcome: DialogOutcome) -> bool {
        let Some(pending) = self.queue.pop_front() else {
            debug!("dialog action ignored; no dialog shown");
            return false;
        };
        if pending.reply.send(outcome).is_err() {
            debug!(title = %pending.request.title, "dialog answered after caller went away");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn confirmation_flows_back_to_the_caller() {
        let (handle, mut inbox) = dialog_channel();
        let mut host = DialogHost::new();
        let mut reply = handle
            .confirm(DialogTone::Danger, "Supprimer", "Supprimer la ligne ?")
            .expect("host mounted");
        assert_eq!(reply.try_outcome(), None);

        assert_eq!(host.absorb(&mut inbox), 1);
        let shown = host.current().expect("dialog shown");
        assert_eq!(shown.tone, DialogTone::Danger);
        assert_eq!(shown.confirm_label, "Confirmer");
        assert_eq!(shown.cancel_label, "Annuler");

        assert!(host.confirm());
        assert_eq!(reply.try_outcome(), Some(DialogOutcome::Confirmed));
        assert!(host.is_empty());
    }

    #[test]
    fn requests_are_shown_in_arrival_order() {
        let (handle, mut inbox) = dialog_channel();
        let mut host = DialogHost::new();
        let first = handle
            .confirm(DialogTone::Info, "first", "")
            .expect("host mounted");
        let second = handle
            .confirm(DialogTone::Warning, "second", "")
            .expect("host mounted");
        host.absorb(&mut inbox);

        assert_eq!(host.current().map(|d| d.title.as_str()), Some("first"));
        assert!(host.cancel());
        assert_eq!(host.current().map(|d| d.title.as_str()), Some("second"));
        assert!(host.confirm());
        assert!(!host.confirm());

        assert_eq!(block_on(first.into_outcome()), DialogOutcome::Cancelled);
        assert_eq!(block_on(second.into_outcome()), DialogOutcome::Confirmed);
    }

    #[test]
    fn required_input_rejects_blank_values() {
        let (handle, mut inbox) = dialog_channel();
        let mut host = DialogHost::new();
        let reply = handle
            .ask_for_input(
                "Renommer",
                "Nouveau nom",
                InputOptions {
                    default_value: "brouillon".into(),
                    required: true,
                    ..InputOptions::default()
                },
            )
            .expect("host mounted");
        host.absorb(&mut inbox);
        assert_eq!(
            host.current()
                .and_then(DialogRequest::input)
                .map(|o| o.default_value.as_str()),
            Some("brouillon")
        );

        assert_eq!(host.submit("   "), Err(UiError::InputRequired));
        assert_eq!(host.len(), 1);
        assert_eq!(host.submit("final"), Ok(true));
        assert_eq!(
            block_on(reply.into_outcome()),
            DialogOutcome::Submitted("final".into())
        );
    }

    #[test]
    fn dropped_dialogs_read_as_cancelled() {
        let (handle, mut inbox) = dialog_channel();
        let mut host = DialogHost::new();
        let mut reply = handle
            .confirm(DialogTone::Info, "t", "m")
            .expect("host mounted");
        host.absorb(&mut inbox);
        drop(host);
        assert_eq!(reply.try_outcome(), Some(DialogOutcome::Cancelled));
    }

    #[test]
    fn opening_without_a_host_fails() {
        let (handle, inbox) = dialog_channel();
        drop(inbox);
        let err = handle
            .confirm(DialogTone::Info, "t", "m")
            .expect_err("no host");
        assert_eq!(err, UiError::HostUnavailable { host: "dialog" });
    }
}
