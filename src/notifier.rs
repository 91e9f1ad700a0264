// SPDX-License-Identifier: MPL-2.0
//! Severity-keyed notification facade.
//!
//! [`ToastBackend`] is the capability any rendering implementation has to
//! provide: four fire-and-forget display operations keyed by severity, each
//! taking a message and a title. [`Manager`](crate::ui::notifications::Manager)
//! is the crate's reference implementation; tests substitute recording stubs.
//!
//! [`Notifier`] layers the localized defaults on top: a call without a title
//! gets the deployment language's default title for its severity, and the
//! form-feedback helpers fill in a default message as well.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Severity;

/// Display capability consumed by the facade.
///
/// All four operations are fire-and-forget: the backend queues or renders
/// asynchronously relative to the call, and no completion signal is exposed.
pub trait ToastBackend {
    fn success(&mut self, message: &str, title: &str);
    fn error(&mut self, message: &str, title: &str);
    fn warning(&mut self, message: &str, title: &str);
    fn info(&mut self, message: &str, title: &str);
}

/// Facade translating severity + message + optional title into backend calls.
pub struct Notifier<B: ToastBackend> {
    backend: B,
    i18n: I18n,
}

impl<B: ToastBackend> Notifier<B> {
    pub fn new(backend: B, i18n: I18n) -> Self {
        Self { backend, i18n }
    }

    /// Shows a success toast. Without a title, the localized default
    /// ("Success" / "Éxito") is used. The message is forwarded unvalidated;
    /// the empty string is accepted as-is.
    pub fn show_success(&mut self, message: &str, title: Option<&str>) {
        let title = self.resolve_title(Severity::Success, title);
        self.backend.success(message, &title);
    }

    /// Shows an error toast. Default title: "Error".
    pub fn show_error(&mut self, message: &str, title: Option<&str>) {
        let title = self.resolve_title(Severity::Error, title);
        self.backend.error(message, &title);
    }

    /// Shows a warning toast. Default title: "Warning" / "Advertencia".
    pub fn show_warning(&mut self, message: &str, title: Option<&str>) {
        let title = self.resolve_title(Severity::Warning, title);
        self.backend.warning(message, &title);
    }

    /// Shows an info toast. Default title: "Information" / "Información".
    pub fn show_info(&mut self, message: &str, title: Option<&str>) {
        let title = self.resolve_title(Severity::Info, title);
        self.backend.info(message, &title);
    }

    /// Success feedback after a form submission, with a localized default
    /// message when the caller has nothing more specific to say.
    pub fn handle_form_success(&mut self, message: Option<&str>) {
        match message {
            Some(message) => self.show_success(message, None),
            None => {
                let message = self.i18n.tr("form-feedback-success");
                self.show_success(&message, None);
            }
        }
    }

    /// Error feedback after a form submission, with a localized default
    /// message when the caller has nothing more specific to say.
    pub fn handle_form_error(&mut self, message: Option<&str>) {
        match message {
            Some(message) => self.show_error(message, None),
            None => {
                let message = self.i18n.tr("form-feedback-error");
                self.show_error(&message, None);
            }
        }
    }

    /// Surfaces a settings persistence failure as a localized error toast.
    pub fn report_error(&mut self, error: &Error) {
        let message = self.i18n.tr(error.i18n_key());
        self.show_error(&message, None);
    }

    fn resolve_title(&self, severity: Severity, title: Option<&str>) -> String {
        match title {
            Some(title) => title.to_string(),
            None => self.i18n.tr(severity.title_key()),
        }
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend, for driving rendering (tick, view) on
    /// the concrete type.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;

    #[derive(Default)]
    struct Recording {
        calls: Vec<(Severity, String, String)>,
    }

    impl ToastBackend for Recording {
        fn success(&mut self, message: &str, title: &str) {
            self.calls
                .push((Severity::Success, message.to_string(), title.to_string()));
        }
        fn error(&mut self, message: &str, title: &str) {
            self.calls
                .push((Severity::Error, message.to_string(), title.to_string()));
        }
        fn warning(&mut self, message: &str, title: &str) {
            self.calls
                .push((Severity::Warning, message.to_string(), title.to_string()));
        }
        fn info(&mut self, message: &str, title: &str) {
            self.calls
                .push((Severity::Info, message.to_string(), title.to_string()));
        }
    }

    fn notifier_with_lang(lang: &str) -> Notifier<Recording> {
        let i18n = I18n::new(Some(lang.to_string()), &ToastConfig::default());
        Notifier::new(Recording::default(), i18n)
    }

    #[test]
    fn default_titles_are_localized_english() {
        let mut notifier = notifier_with_lang("en-US");
        notifier.show_success("saved", None);
        notifier.show_error("failed", None);
        notifier.show_warning("careful", None);
        notifier.show_info("fyi", None);

        let titles: Vec<&str> = notifier
            .backend()
            .calls
            .iter()
            .map(|(_, _, t)| t.as_str())
            .collect();
        assert_eq!(titles, vec!["Success", "Error", "Warning", "Information"]);
    }

    #[test]
    fn default_titles_are_localized_spanish() {
        let mut notifier = notifier_with_lang("es");
        notifier.show_success("guardado", None);
        notifier.show_warning("cuidado", None);

        assert_eq!(notifier.backend().calls[0].2, "Éxito");
        assert_eq!(notifier.backend().calls[1].2, "Advertencia");
    }

    #[test]
    fn explicit_title_overrides_default() {
        let mut notifier = notifier_with_lang("en-US");
        notifier.show_success("saved", Some("All done"));

        assert_eq!(notifier.backend().calls[0].2, "All done");
    }

    #[test]
    fn empty_message_is_forwarded_unmodified() {
        let mut notifier = notifier_with_lang("en-US");
        notifier.show_info("", None);

        assert_eq!(notifier.backend().calls[0].1, "");
    }

    #[test]
    fn form_success_uses_localized_default_message() {
        let mut notifier = notifier_with_lang("en-US");
        notifier.handle_form_success(None);

        let (severity, message, title) = &notifier.backend().calls[0];
        assert_eq!(*severity, Severity::Success);
        assert_eq!(message, "Operation completed successfully");
        assert_eq!(title, "Success");
    }

    #[test]
    fn form_error_uses_localized_default_message() {
        let mut notifier = notifier_with_lang("es");
        notifier.handle_form_error(None);

        let (severity, message, _) = &notifier.backend().calls[0];
        assert_eq!(*severity, Severity::Error);
        assert_eq!(message, "Ocurrió un error al procesar la solicitud");
    }

    #[test]
    fn report_error_localizes_the_failure() {
        let mut notifier = notifier_with_lang("es");
        notifier.report_error(&Error::Io("denied".into()));

        let (severity, message, title) = &notifier.backend().calls[0];
        assert_eq!(*severity, Severity::Error);
        assert_eq!(message, "No se pudo acceder al archivo de configuración");
        assert_eq!(title, "Error");
    }

    #[test]
    fn form_helpers_pass_explicit_messages_through() {
        let mut notifier = notifier_with_lang("en-US");
        notifier.handle_form_success(Some("Profile updated"));
        notifier.handle_form_error(Some("Quota exceeded"));

        assert_eq!(notifier.backend().calls[0].1, "Profile updated");
        assert_eq!(notifier.backend().calls[1].1, "Quota exceeded");
    }
}
