// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It owns the [`ToastConfig`] handed to it at startup: stacking order,
//! duplicate suppression, the visible cap, and all show/dwell/hide timings
//! come from that value rather than from any global state.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::ToastConfig;
use crate::notifier::ToastBackend;
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking display timers.
    Tick,
    /// The pointer entered a toast; its dwell is paused.
    PointerEntered(NotificationId),
    /// The pointer left a toast; the extended dwell starts.
    PointerExited(NotificationId),
}

/// Display phase of a visible toast.
///
/// `Showing` runs the fade-in and then the configured dwell. A hover moves
/// the toast to `Hovered` (no timer); the pointer leaving starts the
/// extended dwell. `Hiding` runs the fade-out, after which the toast is
/// removed and the queue promotes.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Showing,
    Hovered,
    Extended { since: Instant },
    Hiding { since: Instant },
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    shown_at: Instant,
    phase: Phase,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications.
    visible: VecDeque<Entry>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    config: ToastConfig,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl Manager {
    /// Creates an empty notification manager with the given display options.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            config,
        }
    }

    /// Returns the display options this manager was built with.
    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    ///
    /// With `prevent_duplicates` set, a notification repeating one still
    /// visible or queued is dropped. Warnings and errors are forwarded to
    /// the `log` facade.
    pub fn push(&mut self, notification: Notification) {
        if self.config.prevent_duplicates && self.is_duplicate(&notification) {
            if self.config.debug {
                log::debug!("suppressed duplicate toast: {}", notification.message());
            }
            return;
        }

        match notification.severity() {
            Severity::Warning => {
                log::warn!("{}: {}", notification.title(), notification.message());
            }
            Severity::Error => {
                log::error!("{}: {}", notification.title(), notification.message());
            }
            Severity::Success | Severity::Info => {}
        }
        if self.config.debug {
            log::debug!(
                "toast push: [{:?}] {}",
                notification.severity(),
                notification.message()
            );
        }

        if self.visible.len() < self.config.max_visible {
            let entry = Entry {
                notification,
                shown_at: Instant::now(),
                phase: Phase::Showing,
            };
            if self.config.newest_on_top {
                self.visible.push_front(entry);
            } else {
                self.visible.push_back(entry);
            }
        } else {
            self.queue.push_back(notification);
        }
    }

    fn is_duplicate(&self, notification: &Notification) -> bool {
        self.visible
            .iter()
            .any(|entry| entry.notification.duplicates(notification))
            || self.queue.iter().any(|queued| queued.duplicates(notification))
    }

    /// Dismisses a notification by its ID, visible or queued.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|e| e.notification.id() == id) {
            self.visible.remove(pos);
            if self.config.debug {
                log::debug!("toast dismissed");
            }
            self.promote_from_queue_at(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick, advancing display phases at `Instant::now()`.
    ///
    /// Should be called periodically (e.g., every 100-500ms).
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances display phases as of `now`.
    ///
    /// A showing toast past its dwell starts hiding; a toast whose pointer
    /// left hides after the extended dwell; a hiding toast past the fade-out
    /// is removed and the queue promotes. A zero `time_out` means sticky:
    /// only a dismiss removes the toast.
    pub fn tick_at(&mut self, now: Instant) {
        let show = self.config.show_duration();
        let hide = self.config.hide_duration();
        let extended = self.config.extended_time_out();
        let dwell = self.config.time_out();

        for entry in &mut self.visible {
            match entry.phase {
                Phase::Showing => {
                    if let Some(dwell) = dwell {
                        if now >= entry.shown_at + show + dwell {
                            entry.phase = Phase::Hiding { since: now };
                        }
                    }
                }
                Phase::Hovered => {}
                Phase::Extended { since } => {
                    if now >= since + extended {
                        entry.phase = Phase::Hiding { since: now };
                    }
                }
                Phase::Hiding { .. } => {}
            }
        }

        let before = self.visible.len();
        self.visible.retain(|entry| match entry.phase {
            Phase::Hiding { since } => now < since + hide,
            _ => true,
        });
        if self.visible.len() < before {
            self.promote_from_queue_at(now);
        }
    }

    /// Pauses the dwell of the toast under the pointer.
    pub fn pointer_entered(&mut self, id: NotificationId) {
        if let Some(entry) = self.entry_mut(id) {
            if matches!(entry.phase, Phase::Showing | Phase::Extended { .. }) {
                entry.phase = Phase::Hovered;
            }
        }
    }

    /// Starts the extended dwell of a toast the pointer just left.
    pub fn pointer_exited(&mut self, id: NotificationId) {
        self.pointer_exited_at(id, Instant::now());
    }

    pub fn pointer_exited_at(&mut self, id: NotificationId, now: Instant) {
        if let Some(entry) = self.entry_mut(id) {
            if matches!(entry.phase, Phase::Hovered) {
                entry.phase = Phase::Extended { since: now };
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
            Message::PointerEntered(id) => {
                self.pointer_entered(*id);
            }
            Message::PointerExited(id) => {
                self.pointer_exited(*id);
            }
        }
    }

    /// Fade opacity of a toast as of `now`, in `0.0..=1.0`.
    ///
    /// Rises along `show_easing` during the fade-in, falls along
    /// `hide_easing` during the fade-out. Unknown IDs report fully opaque.
    #[must_use]
    pub fn opacity_at(&self, id: NotificationId, now: Instant) -> f32 {
        let Some(entry) = self.entry(id) else {
            return 1.0;
        };
        match entry.phase {
            Phase::Hiding { since } => {
                let fade = self.config.hide_duration();
                if fade.is_zero() {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(since);
                1.0 - self
                    .config
                    .hide_easing
                    .apply(elapsed.as_secs_f32() / fade.as_secs_f32())
            }
            _ => {
                let fade = self.config.show_duration();
                if fade.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(entry.shown_at);
                if elapsed >= fade {
                    1.0
                } else {
                    self.config
                        .show_easing
                        .apply(elapsed.as_secs_f32() / fade.as_secs_f32())
                }
            }
        }
    }

    /// Remaining fraction of the dwell as of `now`, for the progress bar.
    ///
    /// A hovered or sticky toast reports a full bar; a hiding toast an
    /// empty one.
    #[must_use]
    pub fn progress_at(&self, id: NotificationId, now: Instant) -> f32 {
        let Some(entry) = self.entry(id) else {
            return 1.0;
        };
        match entry.phase {
            Phase::Showing => match self.config.time_out() {
                Some(dwell) => {
                    let deadline = entry.shown_at + self.config.show_duration() + dwell;
                    let remaining = deadline.saturating_duration_since(now);
                    (remaining.as_secs_f32() / dwell.as_secs_f32()).clamp(0.0, 1.0)
                }
                None => 1.0,
            },
            Phase::Hovered => 1.0,
            Phase::Extended { since } => {
                let extended = self.config.extended_time_out();
                if extended.is_zero() {
                    return 0.0;
                }
                let deadline = since + extended;
                let remaining = deadline.saturating_duration_since(now);
                (remaining.as_secs_f32() / extended.as_secs_f32()).clamp(0.0, 1.0)
            }
            Phase::Hiding { .. } => 0.0,
        }
    }

    /// Returns the currently visible notifications in stacking order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|entry| &entry.notification)
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn entry(&self, id: NotificationId) -> Option<&Entry> {
        self.visible.iter().find(|e| e.notification.id() == id)
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Entry> {
        self.visible.iter_mut().find(|e| e.notification.id() == id)
    }

    /// Promotes queued notifications to visible while there's space.
    ///
    /// A promoted toast is the newest on screen, so it stacks per
    /// `newest_on_top` just like a direct push.
    fn promote_from_queue_at(&mut self, now: Instant) {
        while self.visible.len() < self.config.max_visible {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            let entry = Entry {
                notification,
                shown_at: now,
                phase: Phase::Showing,
            };
            if self.config.newest_on_top {
                self.visible.push_front(entry);
            } else {
                self.visible.push_back(entry);
            }
        }
    }
}

impl ToastBackend for Manager {
    fn success(&mut self, message: &str, title: &str) {
        self.push(Notification::success(title, message));
    }

    fn error(&mut self, message: &str, title: &str) {
        self.push(Notification::error(title, message));
    }

    fn warning(&mut self, message: &str, title: &str) {
        self.push(Notification::warning(title, message));
    }

    fn info(&mut self, message: &str, title: &str) {
        self.push(Notification::info(title, message));
    }
}
