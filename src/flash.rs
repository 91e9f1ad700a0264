// SPDX-License-Identifier: MPL-2.0
//! One-shot delivery of server-origin flash messages.
//!
//! A flash message is a short-lived notice produced by server-side page
//! rendering for one-time display. The server hands the client a startup
//! payload of [`FlashMessage`] values; [`deliver`] turns each into a toast
//! through the facade, in payload order, and consumes the payload.
//!
//! Consumption by value is the exactly-once contract: once delivered, the
//! payload is gone and cannot be replayed.

use crate::notifier::{Notifier, ToastBackend};
use crate::ui::notifications::Severity;
use serde::{Deserialize, Serialize};

/// A single server-origin notice.
///
/// The serde field names match the wire contract of the producing side
/// (`message-type`, `message-text`), so a server payload deserializes
/// directly into a `Vec<FlashMessage>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Severity tag as sent by the server; may be absent or unrecognized.
    #[serde(rename = "message-type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Free-form display text.
    #[serde(rename = "message-text")]
    pub text: String,
}

impl FlashMessage {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            text: text.into(),
        }
    }

    /// A notice with no severity tag; it displays as informational.
    pub fn untyped(text: impl Into<String>) -> Self {
        Self {
            kind: None,
            text: text.into(),
        }
    }
}

/// Maps a server severity tag to a toast severity.
///
/// `danger` is an alias for `error`. Anything unrecognized, including an
/// absent or empty tag, degrades to informational rather than being
/// signaled as an error. Matching is exact: no trimming, no case folding.
#[must_use]
pub fn severity_for(kind: Option<&str>) -> Severity {
    match kind {
        Some("success") => Severity::Success,
        Some("error") | Some("danger") => Severity::Error,
        Some("warning") => Severity::Warning,
        Some("info") => Severity::Info,
        _ => Severity::Info,
    }
}

/// Delivers a startup payload of flash messages, in order.
///
/// Each message dispatches to the facade operation for its mapped severity
/// with no explicit title, so the localized default title applies. The
/// payload is consumed; an empty payload is a no-op.
pub fn deliver<B: ToastBackend>(notifier: &mut Notifier<B>, messages: Vec<FlashMessage>) {
    for message in messages {
        match severity_for(message.kind.as_deref()) {
            Severity::Success => notifier.show_success(&message.text, None),
            Severity::Error => notifier.show_error(&message.text, None),
            Severity::Warning => notifier.show_warning(&message.text, None),
            Severity::Info => notifier.show_info(&message.text, None),
        }
    }
}
