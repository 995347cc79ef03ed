//! Toast notifications delivered through an injected notifier.
//!
//! # Design
//! - Callers hold a cloneable [`Notifier`]; the mounted host drains the matching [`ToastInbox`].
//! - Time is passed in as milliseconds so expiry stays deterministic and DOM-free.
//! - The visible stack is bounded; the oldest toast gives way when it overflows.

use std::collections::VecDeque;

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::config::ToastConfig;
use crate::error::{UiError, UiResult};

/// Toast variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Failure notice.
    Error,
    /// Informational notice.
    Info,
    /// Success notice.
    Success,
    /// Warning notice.
    Warning,
    /// "Copied to clipboard" notice.
    Clipboard,
}

impl ToastKind {
    /// Every kind, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Error,
            Self::Info,
            Self::Success,
            Self::Warning,
            Self::Clipboard,
        ]
    }

    /// Lowercase name, also used as the style modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Clipboard => "clipboard",
        }
    }
}

/// Request sent by a [`Notifier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    /// Toast variant.
    pub kind: ToastKind,
    /// Message text.
    pub message: String,
    /// Lifetime override; the kind's default applies when `None`.
    pub duration_ms: Option<u64>,
}

/// Cloneable handle used anywhere in the app to raise toasts.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: UnboundedSender<ToastRequest>,
}

impl Notifier {
    /// Queue a toast.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the toast host is gone.
    pub fn notify(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: Option<u64>,
    ) -> UiResult<()> {
        self.tx
            .unbounded_send(ToastRequest {
                kind,
                message: message.into(),
                duration_ms,
            })
            .map_err(|_| UiError::HostUnavailable { host: "toast" })
    }

    /// Queue an error toast.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the toast host is gone.
    pub fn error(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(ToastKind::Error, message, None)
    }

    /// Queue an info toast.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the toast host is gone.
    pub fn info(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(ToastKind::Info, message, None)
    }

    /// Queue a success toast.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the toast host is gone.
    pub fn success(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(ToastKind::Success, message, None)
    }

    /// Queue a warning toast.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the toast host is gone.
    pub fn warning(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(ToastKind::Warning, message, None)
    }

    /// Queue a clipboard confirmation toast.
    ///
    /// # Errors
    /// Returns [`UiError::HostUnavailable`] when the toast host is gone.
    pub fn clipboard(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(ToastKind::Clipboard, message, None)
    }
}

/// Receiving end owned by the toast host.
#[derive(Debug)]
pub struct ToastInbox {
    rx: UnboundedReceiver<ToastRequest>,
}

impl ToastInbox {
    /// Take every pending request without waiting.
    #[allow(deprecated)]
    pub fn drain(&mut self) -> Vec<ToastRequest> {
        let mut pending = Vec::new();
        while let Ok(Some(request)) = self.rx.try_next() {
            pending.push(request);
        }
        pending
    }
}

/// Create a connected notifier/inbox pair.
#[must_use]
pub fn toast_channel() -> (Notifier, ToastInbox) {
    let (tx, rx) = unbounded();
    (Notifier { tx }, ToastInbox { rx })
}

/// Toast currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier.
    pub id: u64,
    /// Variant.
    pub kind: ToastKind,
    /// Message text.
    pub message: String,
    /// Lifetime in milliseconds.
    pub duration_ms: u64,
    /// When the toast was shown.
    pub shown_at_ms: u64,
}

impl Toast {
    /// Time at which the toast disappears.
    #[must_use]
    pub const fn expires_at_ms(&self) -> u64 {
        self.shown_at_ms.saturating_add(self.duration_ms)
    }
}

/// Visible toast stack owned by the host.
#[derive(Clone, Debug, Default)]
pub struct ToastCenter {
    config: ToastConfig,
    next_id: u64,
    active: VecDeque<Toast>,
}

impl ToastCenter {
    /// Empty stack using `config` for durations and capacity.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            next_id: 0,
            active: VecDeque::new(),
        }
    }

    /// Show a toast now; returns its id.
    pub fn push(&mut self, request: ToastRequest, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let duration_ms = request
            .duration_ms
            .unwrap_or_else(|| self.config.duration_ms(request.kind));
        self.active.push_back(Toast {
            id,
            kind: request.kind,
            message: request.message,
            duration_ms,
            shown_at_ms: now_ms,
        });
        while self.active.len() > self.config.capacity.max(1) {
            if let Some(dropped) = self.active.pop_front() {
                warn!(id = dropped.id, "toast stack full; dropping oldest toast");
            }
        }
        id
    }

    /// Show every request pending in `inbox`; returns how many were added.
    pub fn absorb(&mut self, inbox: &mut ToastInbox, now_ms: u64) -> usize {
        let pending = inbox.drain();
        let added = pending.len();
        for request in pending {
            self.push(request, now_ms);
        }
        if added > 0 {
            trace!(added, "absorbed toast requests");
        }
        added
    }

    /// Remove a toast by id; `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|toast| toast.id != id);
        self.active.len() != before
    }

    /// Remove toasts whose lifetime has elapsed; returns their ids.
    pub fn expire(&mut self, now_ms: u64) -> Vec<u64> {
        let (expired, kept): (Vec<Toast>, Vec<Toast>) = self
            .active
            .drain(..)
            .partition(|toast| toast.expires_at_ms() <= now_ms);
        self.active = kept.into();
        expired.into_iter().map(|toast| toast.id).collect()
    }

    /// Visible toasts, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    /// Number of visible toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no toast is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Earliest expiry among visible toasts, for scheduling the next sweep.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.active.iter().map(Toast::expires_at_ms).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_requests_reach_the_center_with_default_durations() {
        let (notifier, mut inbox) = toast_channel();
        notifier.error("boom").expect("host mounted");
        notifier.clipboard("copied").expect("host mounted");
        notifier
            .notify(ToastKind::Info, "custom", Some(1_500))
            .expect("host mounted");

        let mut center = ToastCenter::new(ToastConfig::default());
        assert_eq!(center.absorb(&mut inbox, 1_000), 3);
        let durations: Vec<_> = center.active().map(|toast| toast.duration_ms).collect();
        assert_eq!(durations, vec![10_000, 5_000, 1_500]);
        assert_eq!(center.next_deadline_ms(), Some(2_500));
    }

    #[test]
    fn expire_and_dismiss_remove_toasts() {
        let mut center = ToastCenter::new(ToastConfig::default());
        let info = center.push(
            ToastRequest {
                kind: ToastKind::Info,
                message: "saved".into(),
                duration_ms: None,
            },
            0,
        );
        let error = center.push(
            ToastRequest {
                kind: ToastKind::Error,
                message: "failed".into(),
                duration_ms: None,
            },
            0,
        );
        assert_eq!(center.expire(5_999), Vec::<u64>::new());
        assert_eq!(center.expire(6_000), vec![info]);
        assert!(center.dismiss(error));
        assert!(!center.dismiss(error));
        assert!(center.is_empty());
    }

    #[test]
    fn overflow_drops_the_oldest_toast() {
        let config = ToastConfig {
            capacity: 2,
            ..ToastConfig::default()
        };
        let mut center = ToastCenter::new(config);
        for message in ["a", "b", "c"] {
            center.push(
                ToastRequest {
                    kind: ToastKind::Success,
                    message: message.into(),
                    duration_ms: None,
                },
                0,
            );
        }
        let messages: Vec<_> = center.active().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn notifying_without_a_host_fails_loudly() {
        let (notifier, inbox) = toast_channel();
        drop(inbox);
        assert_eq!(
            notifier.warning("nobody listens"),
            Err(UiError::HostUnavailable { host: "toast" })
        );
    }
}
