// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_flash::config::ToastConfig;
//! use iced_flash::ui::notifications::{Manager, Notification, Toast};
//! use std::time::Instant;
//!
//! // Create a manager from an explicit configuration value
//! let mut manager = Manager::new(ToastConfig::default());
//!
//! // Push a notification
//! manager.push(Notification::success("Success", "Image saved successfully"));
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&manager, Instant::now()).map(Message::Notification);
//! ```
//!
//! Display behavior (timings, stacking, duplicate suppression, placement)
//! comes from the [`ToastConfig`](crate::config::ToastConfig) the manager
//! was built with.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
