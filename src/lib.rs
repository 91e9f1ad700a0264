// SPDX-License-Identifier: MPL-2.0
//! `iced_flash` provides toast notifications, one-shot flash-message
//! delivery, and a blocking confirm gate for applications built with the
//! Iced GUI framework.
//!
//! The display options (placement, timings, stacking, duplicate
//! suppression) are an explicit [`config::ToastConfig`] value handed once to
//! the [`ui::notifications::Manager`] at startup. The four severity-keyed
//! display operations sit behind the [`notifier::ToastBackend`] capability,
//! so any rendering implementation can stand in for the bundled Iced
//! widget. Server-origin notices arrive as a [`flash::FlashMessage`] payload
//! and are delivered exactly once. Default titles and feedback messages are
//! localized with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_flash/0.2.0")]

pub mod config;
pub mod confirm;
pub mod error;
pub mod flash;
pub mod i18n;
pub mod notifier;
pub mod ui;

pub use config::{Easing, Position, ToastConfig};
pub use confirm::{confirm_action, confirm_action_with, ConfirmPrompt, NativeConfirm};
pub use error::{Error, Result};
pub use flash::{deliver, severity_for, FlashMessage};
pub use notifier::{Notifier, ToastBackend};
pub use ui::notifications::{Manager, Notification, NotificationMessage, Severity, Toast};
