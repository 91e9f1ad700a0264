// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, a title line, an optional
//! dismiss button, and an optional remaining-time bar. Opacity follows the
//! manager's fade phases, so cards ease in and out rather than popping.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::config::Position;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification as of `now`.
    pub fn view<'a>(
        manager: &'a Manager,
        notification: &'a Notification,
        now: Instant,
    ) -> Element<'a, Message> {
        let config = manager.config();
        let id = notification.id();
        let accent_color = notification.severity().color();
        let alpha = manager.opacity_at(id, now);

        let title_widget = Text::new(notification.title())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(with_alpha(accent_color, alpha)),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY_SM)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        // Header: [title] [dismiss]
        let mut header = Row::new().spacing(spacing::SM).align_y(alignment::Vertical::Center).push(
            Container::new(title_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );
        if config.close_button {
            let dismiss_button = button(Text::new("\u{00d7}").size(sizing::ICON_SM))
                .on_press(Message::Dismiss(id))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            header = header.push(dismiss_button);
        }

        let mut content = Column::new()
            .spacing(spacing::XXS)
            .push(header)
            .push(message_widget);
        if config.progress_bar {
            content = content.push(progress_track(
                manager.progress_at(id, now),
                accent_color,
                alpha,
            ));
        }

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha));

        mouse_area(card)
            .on_enter(Message::PointerEntered(id))
            .on_exit(Message::PointerExited(id))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Stacks toasts at the corner configured by `position`.
    pub fn view_overlay<'a>(manager: &'a Manager, now: Instant) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(manager, notification, now))
            .collect();

        if toasts.is_empty() {
            // Nothing visible: occupy no space
            return Column::new().into();
        }

        let (align_x, align_y) = anchor(manager.config().position);
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(align_x);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }
}

/// Maps the configured overlay position to container alignment.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = match position {
        Position::TopLeft | Position::TopCenter | Position::TopRight => alignment::Vertical::Top,
        Position::BottomLeft | Position::BottomCenter | Position::BottomRight => {
            alignment::Vertical::Bottom
        }
    };
    (horizontal, vertical)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Remaining-time bar under the message text.
fn progress_track<'a>(fraction: f32, accent_color: Color, alpha: f32) -> Element<'a, Message> {
    let filled = (fraction.clamp(0.0, 1.0) * 100.0).round() as u16;
    let mut track = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_TRACK));

    if filled > 0 {
        track = track.push(
            Container::new(text(""))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(with_alpha(accent_color, alpha))),
                    border: iced::Border {
                        radius: radius::SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }
    if filled < 100 {
        track = track.push(
            Container::new(text(""))
                .width(Length::FillPortion(100 - filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(Color {
                        a: opacity::TRACK * alpha,
                        ..accent_color
                    })),
                    ..Default::default()
                }),
        );
    }
    track.into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: with_alpha(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let mut style = button::Style {
        background: None,
        text_color: base.text,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    };

    let backdrop = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    match status {
        button::Status::Active => {}
        button::Status::Hovered => {
            style.background = backdrop(opacity::OVERLAY_SUBTLE);
            style.border.radius = radius::SM.into();
        }
        button::Status::Pressed => {
            style.background = backdrop(opacity::OVERLAY_MEDIUM);
            style.border.radius = radius::SM.into();
        }
        button::Status::Disabled => {
            style.text_color = Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            };
        }
    }
    style
}
