// SPDX-License-Identifier: MPL-2.0
//! Blocking confirm-then-run gate.
//!
//! [`confirm_action`] presents a modal yes/no dialog and runs the supplied
//! action only on acceptance. The dialog blocks the calling thread until the
//! user responds; there is no timeout. The prompt itself sits behind the
//! [`ConfirmPrompt`] capability so tests (or an embedded host surface) can
//! substitute their own dialog.

use crate::i18n::fluent::I18n;

/// Capability for asking the user a blocking yes/no question.
pub trait ConfirmPrompt {
    /// Returns `true` if the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// Native modal confirmation dialog.
pub struct NativeConfirm {
    title: String,
}

impl NativeConfirm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the deployment language's dialog title ("Confirm" / "Confirmar").
    #[must_use]
    pub fn localized(i18n: &I18n) -> Self {
        Self {
            title: i18n.tr("confirm-title"),
        }
    }

    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for NativeConfirm {
    fn default() -> Self {
        Self {
            title: "Confirm".to_string(),
        }
    }
}

impl ConfirmPrompt for NativeConfirm {
    fn confirm(&self, message: &str) -> bool {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(rfd::MessageButtons::OkCancel)
            .show();
        matches!(result, rfd::MessageDialogResult::Ok)
    }
}

/// Asks `prompt` for confirmation and runs `action` only on acceptance.
///
/// Returns `true` and invokes `action` exactly once when the user accepts;
/// returns `false` without invoking it when the user declines. Never raises:
/// a decline is a normal outcome, not an error.
pub fn confirm_action_with<P, F>(prompt: &P, message: &str, action: F) -> bool
where
    P: ConfirmPrompt + ?Sized,
    F: FnOnce(),
{
    if prompt.confirm(message) {
        action();
        true
    } else {
        false
    }
}

/// [`confirm_action_with`] over the native modal dialog.
pub fn confirm_action<F: FnOnce()>(message: &str, action: F) -> bool {
    confirm_action_with(&NativeConfirm::default(), message, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use std::cell::Cell;

    struct Accepting;
    struct Declining;

    impl ConfirmPrompt for Accepting {
        fn confirm(&self, _message: &str) -> bool {
            true
        }
    }

    impl ConfirmPrompt for Declining {
        fn confirm(&self, _message: &str) -> bool {
            false
        }
    }

    #[test]
    fn accepted_action_runs_exactly_once() {
        let runs = Cell::new(0);
        let accepted = confirm_action_with(&Accepting, "Delete the record?", || {
            runs.set(runs.get() + 1);
        });

        assert!(accepted);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn declined_action_never_runs() {
        let runs = Cell::new(0);
        let accepted = confirm_action_with(&Declining, "Delete the record?", || {
            runs.set(runs.get() + 1);
        });

        assert!(!accepted);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn localized_prompt_uses_translated_title() {
        let i18n = I18n::new(Some("es".to_string()), &ToastConfig::default());
        let prompt = NativeConfirm::localized(&i18n);
        assert_eq!(prompt.title, "Confirmar");
    }

    #[test]
    fn with_title_overrides_default() {
        let prompt = NativeConfirm::with_title("Are you sure?");
        assert_eq!(prompt.title, "Are you sure?");
    }
}
